// File: crates/chart-core/src/line.rs
// Summary: Line chart config -> option object (one line series per dataset).

use crate::config::LineChartConfig;
use crate::option::{AxisOption, ChartOption, DataItem, Legend, SeriesKind, SeriesOption, Title};
use crate::types::{DEFAULT_BACKGROUND, PALETTE};

pub const DEFAULT_TITLE: &str = "Line Chart";
pub const OUTPUT_FILE: &str = "line-chart.png";

pub fn build_option(config: &LineChartConfig) -> ChartOption {
    let series = config
        .datasets
        .iter()
        .map(|ds| {
            let data = ds.data.iter().map(|&v| DataItem::scalar(v)).collect();
            let mut s = SeriesOption::new(SeriesKind::Line, data).named(&ds.label);
            s.smooth = Some(false);
            s
        })
        .collect();

    let mut x_axis = AxisOption::category(config.x_axis.categories.clone());
    x_axis.boundary_gap = Some(false);

    ChartOption {
        title: Some(Title::centered(config.title.as_deref().unwrap_or(DEFAULT_TITLE))),
        background_color: Some(DEFAULT_BACKGROUND.to_string()),
        color: PALETTE.iter().map(|c| c.to_string()).collect(),
        legend: Some(Legend::bottom(config.datasets.iter().map(|d| d.label.clone()).collect())),
        x_axis: Some(x_axis),
        y_axis: Some(AxisOption::value()),
        series,
        ..ChartOption::default()
    }
}
