// File: crates/chart-core/src/radar.rs
// Summary: Radar chart config -> option object (indicators, ring fills, one polygon per dataset).

use crate::color::with_alpha;
use crate::config::{RadarConfig, RadarDataset};
use crate::option::{
    AreaStyle, ChartOption, DataItem, Legend, LineStyle, RadarIndicator, RadarOption, RadarShape,
    SeriesKind, SeriesOption, SplitArea, Title,
};
use crate::types::{palette_color, DEFAULT_BACKGROUND, DEFAULT_RING_COLORS, RADAR_FILL_ALPHA};

pub const DEFAULT_TITLE: &str = "Radar Chart";
pub const OUTPUT_FILE: &str = "radar-chart.png";
pub const SPLIT_NUMBER: u32 = 5;
pub const LINE_WIDTH: f32 = 2.0;

/// Line color for dataset `index`: explicit `lineColor` or the palette.
pub fn line_color(dataset: &RadarDataset, index: usize) -> String {
    dataset.line_color.clone().unwrap_or_else(|| palette_color(index).to_string())
}

/// Fill color: explicit `fillColor`, else the line color at reduced alpha.
pub fn fill_color(dataset: &RadarDataset, index: usize) -> String {
    match &dataset.fill_color {
        Some(c) => c.clone(),
        None => with_alpha(&line_color(dataset, index), RADAR_FILL_ALPHA),
    }
}

pub fn build_option(config: &RadarConfig) -> ChartOption {
    let indicator = config
        .indicators
        .iter()
        .map(|ind| RadarIndicator { name: ind.name.clone(), min: ind.min.unwrap_or(0.0), max: ind.max })
        .collect();

    let ring_colors = if config.ring_colors.is_empty() {
        DEFAULT_RING_COLORS.iter().map(|c| c.to_string()).collect()
    } else {
        config.ring_colors.clone()
    };

    let shape = config.radar_shape.as_deref().map(RadarShape::from_name).unwrap_or_default();

    let data = config
        .datasets
        .iter()
        .enumerate()
        .map(|(i, ds)| {
            let line = line_color(ds, i);
            let mut item = DataItem::vector(ds.values.clone()).named(&ds.label).colored(&line);
            item.line_style = Some(LineStyle { color: line, width: LINE_WIDTH });
            item.area_style = Some(AreaStyle::Fill { color: fill_color(ds, i) });
            item
        })
        .collect();

    ChartOption {
        title: Some(Title::centered(config.title.as_deref().unwrap_or(DEFAULT_TITLE))),
        background_color: Some(DEFAULT_BACKGROUND.to_string()),
        legend: Some(Legend::bottom(config.datasets.iter().map(|d| d.label.clone()).collect())),
        radar: Some(RadarOption {
            indicator,
            shape,
            split_number: SPLIT_NUMBER,
            split_area: SplitArea { show: true, area_style: AreaStyle::Bands { color: ring_colors } },
        }),
        series: vec![SeriesOption::new(SeriesKind::Radar, data)],
        ..ChartOption::default()
    }
}
