// File: crates/chart-render-skia/src/radar.rs
// Summary: Radar scene shared by both option schemas: rings, split areas, spokes, dataset polygons.

use skia_safe as skia;

use chart_core::chartjs::RadarChartConfig;
use chart_core::grid::nice_ceil;
use chart_core::option::{AreaStyle, ChartOption, RadarShape, SeriesKind};
use chart_core::types::palette_color;
use chart_core::with_alpha;

use crate::geometry::{clamp, polar};
use crate::render::{skia_color, Painter, Render};
use crate::text::Align;
use crate::theme::Theme;

const RADIUS_RATIO: f32 = 0.8;
const LABEL_SIZE: f32 = 12.0;
const FALLBACK_FILL_ALPHA: f32 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug)]
pub struct Polygon {
    pub values: Vec<f64>,
    pub stroke: skia::Color,
    pub fill: skia::Color,
    pub width: f32,
}

/// Everything needed to draw a radar, independent of which schema described it.
#[derive(Clone, Debug)]
pub struct RadarScene {
    pub title: Option<String>,
    pub axes: Vec<Axis>,
    pub shape: RadarShape,
    pub split_number: u32,
    pub ring_fills: Vec<skia::Color>,
    pub polygons: Vec<Polygon>,
    pub legend: Vec<(String, skia::Color)>,
}

/// Largest value at `index` across all datasets.
fn column_max<'a>(rows: impl Iterator<Item = &'a [f64]>, index: usize) -> f64 {
    rows.filter_map(|r| r.get(index).copied()).fold(f64::NEG_INFINITY, f64::max)
}

impl RadarScene {
    /// Build from an ECharts-style option; `None` without a `radar` component.
    pub fn from_option(option: &ChartOption, theme: &Theme) -> Option<Self> {
        let radar = option.radar.as_ref()?;
        let items: Vec<_> = option
            .series
            .iter()
            .filter(|s| s.kind == SeriesKind::Radar)
            .flat_map(|s| s.data.iter())
            .collect();

        let split_number = radar.split_number.max(1);
        let axes = radar
            .indicator
            .iter()
            .enumerate()
            .map(|(i, ind)| {
                // Missing max: round the data maximum up to a ring boundary.
                let max = ind.max.unwrap_or_else(|| {
                    let m = column_max(items.iter().map(|d| d.value.as_slice()), i);
                    ind.min + nice_ceil(m - ind.min, split_number as usize)
                });
                Axis { name: ind.name.clone(), min: ind.min, max }
            })
            .collect();

        let ring_fills = match (radar.split_area.show, &radar.split_area.area_style) {
            (true, AreaStyle::Bands { color }) => color.iter().map(|c| skia_color(c, theme.background)).collect(),
            (true, AreaStyle::Fill { color }) => vec![skia_color(color, theme.background)],
            (false, _) => Vec::new(),
        };

        let polygons: Vec<Polygon> = items
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let line = d
                    .line_style
                    .as_ref()
                    .map(|l| l.color.as_str())
                    .unwrap_or_else(|| d.color_or(palette_color(i)))
                    .to_string();
                let fill = match &d.area_style {
                    Some(AreaStyle::Fill { color }) => color.clone(),
                    _ => with_alpha(&line, FALLBACK_FILL_ALPHA),
                };
                Polygon {
                    values: d.value.as_slice().to_vec(),
                    stroke: skia_color(&line, theme.series_fallback),
                    fill: skia_color(&fill, theme.series_fallback),
                    width: d.line_style.as_ref().map(|l| l.width).unwrap_or(2.0),
                }
            })
            .collect();

        let legend = items
            .iter()
            .zip(&polygons)
            .filter_map(|(d, poly)| d.name.clone().map(|n| (n, poly.stroke)))
            .collect();

        Some(Self {
            title: option.title.as_ref().map(|t| t.text.clone()),
            axes,
            shape: radar.shape,
            split_number,
            ring_fills,
            polygons,
            legend,
        })
    }

    /// Build from a Chart.js-style radar config: one shared radial scale from zero.
    pub fn from_chartjs(config: &RadarChartConfig, theme: &Theme) -> Self {
        const TICKS: u32 = 5;
        let data_max = config.data.datasets.iter().flat_map(|d| d.data.iter().copied()).fold(0.0, f64::max);
        let max = nice_ceil(data_max.max(config.options.scales.r.suggested_max.unwrap_or(0.0)), TICKS as usize);
        let min = if config.options.scales.r.begin_at_zero {
            0.0
        } else {
            config.data.datasets.iter().flat_map(|d| d.data.iter().copied()).fold(0.0, f64::min)
        };

        let axes = config.data.labels.iter().map(|l| Axis { name: l.clone(), min, max }).collect();

        let polygons: Vec<Polygon> = config
            .data
            .datasets
            .iter()
            .map(|d| Polygon {
                values: d.data.clone(),
                stroke: skia_color(&d.border_color, theme.series_fallback),
                fill: skia_color(&d.background_color, theme.series_fallback),
                width: d.border_width,
            })
            .collect();

        let legend = config.data.datasets.iter().zip(&polygons).map(|(d, p)| (d.label.clone(), p.stroke)).collect();

        let title = &config.options.plugins.title;
        Self {
            title: title.display.then(|| title.text.clone()),
            axes,
            shape: RadarShape::Polygon,
            split_number: TICKS,
            ring_fills: Vec::new(),
            polygons,
            legend,
        }
    }

    /// Angle of spoke `i`, clockwise from 12 o'clock.
    fn angle(&self, i: usize) -> f32 {
        std::f32::consts::TAU * i as f32 / self.axes.len().max(1) as f32
    }

    /// Closed ring outline at `radius`.
    fn ring_path(&self, center: (f32, f32), radius: f32) -> skia::Path {
        let mut path = skia::Path::new();
        match self.shape {
            RadarShape::Circle => {
                path.add_circle(center, radius, None);
            }
            RadarShape::Polygon => {
                for i in 0..self.axes.len() {
                    let pt = polar(center, radius, self.angle(i));
                    if i == 0 { path.move_to(pt); } else { path.line_to(pt); }
                }
                path.close();
            }
        }
        path
    }

    /// Fraction of the radius for `value` on axis `i`; missing values sit at the minimum.
    pub fn fraction(&self, i: usize, value: Option<f64>) -> f32 {
        let axis = &self.axes[i];
        let span = (axis.max - axis.min).max(1e-9);
        let v = value.unwrap_or(axis.min);
        clamp(((v - axis.min) / span) as f32, 0.0, 1.0)
    }

    pub fn draw(&self, p: &Painter<'_>) {
        if let Some(title) = &self.title {
            p.title(title);
        }
        p.legend(&self.legend);

        let n = self.axes.len();
        if n == 0 {
            return;
        }

        let center = p.plot.center();
        let radius = p.plot.width().min(p.plot.height()) * 0.5 * RADIUS_RATIO;
        let splits = self.split_number as usize;

        // Split areas, outermost band first; even-odd fill leaves the inner ring open.
        if !self.ring_fills.is_empty() {
            for k in (1..=splits).rev() {
                let outer = radius * k as f32 / splits as f32;
                let inner = radius * (k - 1) as f32 / splits as f32;
                let mut band = self.ring_path(center, outer);
                if k > 1 {
                    band.add_path(&self.ring_path(center, inner), (0.0, 0.0), None);
                }
                band.set_fill_type(skia::PathFillType::EvenOdd);
                let color = self.ring_fills[(k - 1) % self.ring_fills.len()];
                p.canvas.draw_path(&band, &p.fill(color));
            }
        }

        let ring = p.stroke(p.theme.radar_ring, 1.0);
        for k in 1..=splits {
            p.canvas.draw_path(&self.ring_path(center, radius * k as f32 / splits as f32), &ring);
        }

        for (i, axis) in self.axes.iter().enumerate() {
            let a = self.angle(i);
            p.canvas.draw_line(center, polar(center, radius, a), &ring);

            let anchor = polar(center, radius + 16.0, a);
            let align = if a.sin() > 0.01 {
                Align::Left
            } else if a.sin() < -0.01 {
                Align::Right
            } else {
                Align::Center
            };
            p.label(&axis.name, anchor.0, anchor.1 + 4.0, LABEL_SIZE, p.theme.axis_label, align);
        }

        for poly in &self.polygons {
            let pts: Vec<(f32, f32)> = (0..n)
                .map(|i| polar(center, radius * self.fraction(i, poly.values.get(i).copied()), self.angle(i)))
                .collect();

            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for &pt in pts.iter().skip(1) {
                path.line_to(pt);
            }
            path.close();

            p.canvas.draw_path(&path, &p.fill(poly.fill));
            p.canvas.draw_path(&path, &p.stroke(poly.stroke, poly.width));
            let dot = p.fill(poly.stroke);
            for &pt in &pts {
                p.canvas.draw_circle(pt, 3.0, &dot);
            }
        }
    }
}

impl Render for RadarChartConfig {
    fn draw(&self, painter: &Painter<'_>) {
        RadarScene::from_chartjs(self, painter.theme).draw(painter);
    }
}
