// File: crates/chart-core/src/bar.rs
// Summary: Bar chart config -> option object.

use crate::config::BarChartConfig;
use crate::option::{AxisOption, ChartOption, DataItem, SeriesKind, SeriesOption, Title};
use crate::types::{DEFAULT_BACKGROUND, DEFAULT_BAR_COLOR};

pub const DEFAULT_TITLE: &str = "Bar Chart";
pub const OUTPUT_FILE: &str = "bar-chart.png";

/// Color for bar `index`: `barColors` (cycled) beats `barColor` beats the default.
pub fn bar_color(config: &BarChartConfig, index: usize) -> &str {
    if !config.bar_colors.is_empty() {
        return &config.bar_colors[index % config.bar_colors.len()];
    }
    config.bar_color.as_deref().unwrap_or(DEFAULT_BAR_COLOR)
}

pub fn build_option(config: &BarChartConfig) -> ChartOption {
    let data = config
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataItem::scalar(v).colored(bar_color(config, i)))
        .collect();

    ChartOption {
        title: Some(Title::centered(config.title.as_deref().unwrap_or(DEFAULT_TITLE))),
        background_color: Some(DEFAULT_BACKGROUND.to_string()),
        x_axis: Some(AxisOption::category(config.categories.clone())),
        y_axis: Some(AxisOption::value()),
        series: vec![SeriesOption::new(SeriesKind::Bar, data)],
        ..ChartOption::default()
    }
}
