// File: crates/chart-render-skia/tests/radar_scene.rs
// Purpose: Radar scene construction from both option schemas (scaling, colors, missing values).

use chart_core::config::RadarConfig;
use chart_core::{match_radar, parse_config, radar, MatchStats, TeamStats};
use chart_render_skia::{RadarScene, Theme};
use skia_safe as skia;

#[test]
fn missing_indicator_max_rounds_up_data_max() {
    let config: RadarConfig = parse_config(
        "indicators: [{name: a}, {name: b, max: 50}]\ndatasets: [{label: x, values: [37, 20]}, {label: y, values: [12]}]",
    )
    .unwrap();
    let scene = RadarScene::from_option(&radar::build_option(&config), &Theme::light()).unwrap();
    assert_eq!(scene.axes[0].max, 40.0);
    assert_eq!(scene.axes[1].max, 50.0);
    assert_eq!(scene.polygons.len(), 2);
    assert_eq!(scene.legend.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(), vec!["x", "y"]);

    // Second dataset has no value for axis b: it sits at the minimum.
    assert_eq!(scene.fraction(1, scene.polygons[1].values.get(1).copied()), 0.0);
    assert_eq!(scene.fraction(1, Some(25.0)), 0.5);
    assert_eq!(scene.fraction(1, Some(500.0)), 1.0);
}

#[test]
fn dataset_colors_resolve_to_skia() {
    let config: RadarConfig =
        parse_config("indicators: [{name: a, max: 1}]\ndatasets: [{label: x, values: [1], lineColor: '#ff0000'}]").unwrap();
    let scene = RadarScene::from_option(&radar::build_option(&config), &Theme::light()).unwrap();
    assert_eq!(scene.polygons[0].stroke, skia::Color::from_argb(255, 255, 0, 0));
    assert_eq!(scene.polygons[0].fill, skia::Color::from_argb(77, 255, 0, 0));
    assert_eq!(scene.ring_fills.len(), 2);
}

#[test]
fn chartjs_scene_shares_one_scale() {
    let stats = MatchStats {
        labels: vec!["Goals".into(), "Possession".into()],
        home: TeamStats { name: "H".into(), values: vec![3.0, 58.0] },
        away: TeamStats { name: "A".into(), values: vec![1.0, 42.0] },
    };
    let scene = RadarScene::from_chartjs(&match_radar::build_config(&stats), &Theme::light());
    assert!(scene.axes.iter().all(|a| a.min == 0.0 && a.max == 60.0));
    assert_eq!(scene.title.as_deref(), Some("H vs A"));
    assert!(scene.ring_fills.is_empty());
}
