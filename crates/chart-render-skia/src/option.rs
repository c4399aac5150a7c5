// File: crates/chart-render-skia/src/option.rs
// Summary: Render impl for the ECharts-style option object; dispatches on series kind.

use skia_safe as skia;

use chart_core::option::{ChartOption, SeriesKind};
use chart_core::types::palette_color;

use crate::render::{skia_color, Painter, Render};
use crate::{cartesian, pie, radar};

/// Series color: the option's `color` list when present, else the default palette.
pub(crate) fn series_color(option: &ChartOption, index: usize, fallback: skia::Color) -> skia::Color {
    let name = if option.color.is_empty() {
        palette_color(index)
    } else {
        option.color[index % option.color.len()].as_str()
    };
    skia_color(name, fallback)
}

/// Legend names paired with the color of the series or data item they label.
fn legend_entries(option: &ChartOption, fallback: skia::Color) -> Vec<(String, skia::Color)> {
    let Some(legend) = &option.legend else { return Vec::new() };

    legend
        .data
        .iter()
        .map(|name| {
            let by_series = option.series.iter().enumerate().find(|(_, s)| s.name.as_deref() == Some(name.as_str()));
            let color = match by_series {
                Some((i, s)) => match s.data.first().and_then(|d| d.item_style.as_ref()) {
                    Some(style) => skia_color(&style.color, fallback),
                    None => series_color(option, i, fallback),
                },
                None => option
                    .series
                    .iter()
                    .flat_map(|s| s.data.iter())
                    .find(|d| d.name.as_deref() == Some(name.as_str()))
                    .map(|d| {
                        let c = d.line_style.as_ref().map(|l| l.color.as_str()).unwrap_or(d.color_or(""));
                        skia_color(c, fallback)
                    })
                    .unwrap_or(fallback),
            };
            (name.clone(), color)
        })
        .collect()
}

impl Render for ChartOption {
    fn background(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    fn draw(&self, painter: &Painter<'_>) {
        let has = |kind: SeriesKind| self.series.iter().any(|s| s.kind == kind);

        if has(SeriesKind::Radar) || self.radar.is_some() {
            // The radar scene draws its own title and legend.
            match radar::RadarScene::from_option(self, painter.theme) {
                Some(scene) => return scene.draw(painter),
                None => tracing::warn!("radar series without a radar coordinate system"),
            }
        } else if has(SeriesKind::Pie) {
            pie::draw(painter, self);
        } else {
            cartesian::draw(painter, self);
        }

        if let Some(title) = &self.title {
            painter.title(&title.text);
        }
        painter.legend(&legend_entries(self, painter.theme.series_fallback));
    }
}
