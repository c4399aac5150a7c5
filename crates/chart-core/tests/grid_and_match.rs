// File: crates/chart-core/tests/grid_and_match.rs
// Purpose: Tick helpers and the Chart.js-style match radar config.

use chart_core::grid::{linspace, nice_ceil, nice_step, nice_ticks};
use chart_core::match_radar::{build_config, AWAY_BORDER, HOME_BORDER, HOME_FILL};
use chart_core::{MatchStats, TeamStats};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn linspace_includes_endpoints() {
    assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
}

#[test]
fn nice_steps_and_ceilings() {
    assert_eq!(nice_step(0.0), 1.0);
    assert_eq!(nice_step(3.0), 5.0);
    assert_eq!(nice_step(12.0), 20.0);
    assert_eq!(nice_ceil(63.0, 5), 80.0);
    assert_eq!(nice_ceil(0.0, 5), 1.0);
}

#[test]
fn nice_ticks_cover_range() {
    let t = nice_ticks(0.0, 47.0, 5);
    assert_eq!(t.first().copied(), Some(0.0));
    assert!(*t.last().unwrap() >= 47.0);
    let t = nice_ticks(3.0, 3.0, 5);
    assert!(t.len() >= 2);
}

#[test]
fn nice_ticks_fall_back_to_endpoints_on_unbounded_span() {
    assert_eq!(nice_ticks(0.0, f64::INFINITY, 5), vec![0.0, f64::INFINITY]);
    assert_eq!(nice_ticks(-1e308, 1e308, 5), vec![-1e308, 1e308]);

    // Finite span whose rounded end overflows.
    let t = nice_ticks(0.0, 1.7e308, 5);
    assert_eq!(t.len(), 2);
}

fn sample() -> MatchStats {
    MatchStats {
        labels: vec!["Goals".into(), "Shots".into()],
        home: TeamStats { name: "Arsenal".into(), values: vec![2.0, 17.0] },
        away: TeamStats { name: "Chelsea".into(), values: vec![1.0, 9.0] },
    }
}

#[test]
fn match_radar_config_literal_structure() {
    let v = serde_json::to_value(build_config(&sample())).unwrap();
    assert_eq!(v["type"], json!("radar"));
    assert_eq!(v["data"]["labels"], json!(["Goals", "Shots"]));
    assert_eq!(
        v["data"]["datasets"][0],
        json!({
            "label": "Arsenal",
            "data": [2.0, 17.0],
            "borderColor": HOME_BORDER,
            "backgroundColor": HOME_FILL,
            "pointBackgroundColor": HOME_BORDER,
            "borderWidth": 2.0,
        })
    );
    assert_eq!(v["data"]["datasets"][1]["borderColor"], json!(AWAY_BORDER));
    assert_eq!(v["options"]["plugins"]["title"], json!({ "display": true, "text": "Arsenal vs Chelsea" }));
    assert_eq!(v["options"]["scales"]["r"], json!({ "beginAtZero": true, "suggestedMax": 20.0 }));
}
