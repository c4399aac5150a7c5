// File: crates/chart-core/src/stacked_bar.rs
// Summary: Stacked team bar config -> option object ("Highest" + "Rest" segments per team).

use crate::color::with_alpha;
use crate::config::{StackedBarConfig, TeamBar};
use crate::option::{AxisOption, ChartOption, DataItem, Legend, SeriesKind, SeriesOption, Title};
use crate::types::{DEFAULT_BACKGROUND, DEFAULT_TEAM_COLOR, STACK_REST_ALPHA};

pub const DEFAULT_TITLE: &str = "Stacked Bar Chart";
pub const OUTPUT_FILE: &str = "stacked-bar-chart.png";
pub const DEFAULT_X_LABEL: &str = "Team";
pub const DEFAULT_Y_LABEL: &str = "Value";
pub const STACK: &str = "total";
pub const HIGHEST: &str = "Highest";
pub const REST: &str = "Rest";

fn team_color(team: &TeamBar) -> &str {
    team.color.as_deref().unwrap_or(DEFAULT_TEAM_COLOR)
}

pub fn build_option(config: &StackedBarConfig) -> ChartOption {
    let highest = config
        .teams
        .iter()
        .map(|t| DataItem::scalar(t.highest).colored(team_color(t)))
        .collect();
    let rest = config
        .teams
        .iter()
        .map(|t| DataItem::scalar(t.rest).colored(with_alpha(team_color(t), STACK_REST_ALPHA)))
        .collect();

    let names = config.teams.iter().map(|t| t.name.clone()).collect();
    let x_label = config.x_axis_label.as_deref().unwrap_or(DEFAULT_X_LABEL);
    let y_label = config.y_axis_label.as_deref().unwrap_or(DEFAULT_Y_LABEL);

    ChartOption {
        title: Some(Title::centered(config.title.as_deref().unwrap_or(DEFAULT_TITLE))),
        background_color: Some(DEFAULT_BACKGROUND.to_string()),
        legend: Some(Legend::bottom(vec![HIGHEST.to_string(), REST.to_string()])),
        x_axis: Some(AxisOption::category(names).named(x_label)),
        y_axis: Some(AxisOption::value().named(y_label)),
        series: vec![
            SeriesOption::new(SeriesKind::Bar, highest).named(HIGHEST).stacked(STACK),
            SeriesOption::new(SeriesKind::Bar, rest).named(REST).stacked(STACK),
        ],
        ..ChartOption::default()
    }
}
