// File: crates/chart-core/src/pie.rs
// Summary: Pie chart config -> option object.

use crate::config::PieChartConfig;
use crate::option::{ChartOption, DataItem, Legend, SeriesKind, SeriesOption, Title};
use crate::types::{palette_color, DEFAULT_BACKGROUND};

pub const DEFAULT_TITLE: &str = "Pie Chart";
pub const OUTPUT_FILE: &str = "pie-chart.png";
pub const RADIUS: &str = "60%";

pub fn build_option(config: &PieChartConfig) -> ChartOption {
    let data = config
        .data
        .iter()
        .enumerate()
        .map(|(i, slice)| DataItem::scalar(slice.value).named(&slice.label).colored(palette_color(i)))
        .collect();

    let mut series = SeriesOption::new(SeriesKind::Pie, data);
    series.radius = Some(RADIUS.to_string());

    ChartOption {
        title: Some(Title::centered(config.title.as_deref().unwrap_or(DEFAULT_TITLE))),
        background_color: Some(DEFAULT_BACKGROUND.to_string()),
        legend: Some(Legend::bottom(config.data.iter().map(|s| s.label.clone()).collect())),
        series: vec![series],
        ..ChartOption::default()
    }
}
