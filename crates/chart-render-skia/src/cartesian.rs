// File: crates/chart-render-skia/src/cartesian.rs
// Summary: Category/value charts: grid, axes, grouped and stacked bars, line series.

use std::collections::HashMap;

use skia_safe as skia;

use chart_core::grid::nice_ticks;
use chart_core::option::{ChartOption, SeriesKind, SeriesOption};

use crate::option::series_color;
use crate::render::{skia_color, Painter};
use crate::text::Align;

const TICK_TARGET: usize = 5;
const LABEL_SIZE: f32 = 12.0;
const BAR_FILL_RATIO: f32 = 0.6;

/// Value range after stacking, always including zero.
fn value_extent(series: &[SeriesOption]) -> (f64, f64) {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    let mut stacks: HashMap<(&str, usize), (f64, f64)> = HashMap::new();

    for s in series {
        for (i, d) in s.data.iter().enumerate() {
            let v = d.value.as_scalar();
            if !v.is_finite() {
                continue;
            }
            match (&s.stack, s.kind) {
                (Some(stack), SeriesKind::Bar) => {
                    let e = stacks.entry((stack.as_str(), i)).or_insert((0.0, 0.0));
                    if v >= 0.0 { e.1 += v } else { e.0 += v }
                    if e.0.is_finite() { lo = lo.min(e.0) }
                    if e.1.is_finite() { hi = hi.max(e.1) }
                }
                _ => {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
        }
    }
    (lo, hi)
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn draw(p: &Painter<'_>, option: &ChartOption) {
    let plot = p.plot;
    let categories: &[String] = option.x_axis.as_ref().map(|a| a.data.as_slice()).unwrap_or(&[]);
    let longest = option.series.iter().map(|s| s.data.len()).max().unwrap_or(0);
    let n = categories.len().max(longest).max(1);
    let boundary_gap = option.x_axis.as_ref().and_then(|a| a.boundary_gap).unwrap_or(true);

    let band = plot.width() / n as f32;
    let x_at = |i: usize| -> f32 {
        if boundary_gap {
            plot.left + band * (i as f32 + 0.5)
        } else if n == 1 {
            plot.left + plot.width() * 0.5
        } else {
            plot.left + plot.width() * i as f32 / (n - 1) as f32
        }
    };

    let (lo, hi) = value_extent(&option.series);
    let ticks = nice_ticks(lo, hi, TICK_TARGET);
    let y_min = ticks.first().copied().unwrap_or(0.0);
    let y_max = ticks.last().copied().unwrap_or(1.0);
    // Halved so spans near f64::MAX stay finite.
    let half_span = (y_max * 0.5 - y_min * 0.5).max(1e-9);
    let sy = |v: f64| -> f32 { plot.bottom - ((v * 0.5 - y_min * 0.5) / half_span) as f32 * plot.height() };

    // Grid & value ticks
    let grid = p.stroke(p.theme.grid, 1.0);
    for &t in &ticks {
        let y = sy(t);
        p.canvas.draw_line((plot.left, y), (plot.right, y), &grid);
        p.label(&format_tick(t), plot.left - 8.0, y + 4.0, LABEL_SIZE, p.theme.axis_label, Align::Right);
    }

    // Axis lines
    let axis = p.stroke(p.theme.axis_line, 1.0);
    let zero_y = sy(0.0f64.clamp(y_min, y_max));
    p.canvas.draw_line((plot.left, zero_y), (plot.right, zero_y), &axis);
    p.canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis);

    for (i, name) in categories.iter().enumerate() {
        let x = x_at(i);
        p.canvas.draw_line((x, plot.bottom), (x, plot.bottom + 5.0), &axis);
        p.label(name, x, plot.bottom + 20.0, LABEL_SIZE, p.theme.axis_label, Align::Center);
    }

    if let Some(name) = option.x_axis.as_ref().and_then(|a| a.name.as_deref()) {
        p.label(name, plot.right, plot.bottom + 40.0, LABEL_SIZE, p.theme.axis_label, Align::Right);
    }
    if let Some(name) = option.y_axis.as_ref().and_then(|a| a.name.as_deref()) {
        p.label(name, plot.left, plot.top - 12.0, LABEL_SIZE, p.theme.axis_label, Align::Center);
    }

    draw_bars(p, option, band, &x_at, &sy);
    draw_lines(p, option, &x_at, &sy);
}

fn draw_bars(
    p: &Painter<'_>,
    option: &ChartOption,
    band: f32,
    x_at: &dyn Fn(usize) -> f32,
    sy: &dyn Fn(f64) -> f32,
) {
    // One slot per stack group (or per unstacked series) within each category band.
    let mut slots: Vec<String> = Vec::new();
    let slot_of: Vec<Option<usize>> = option
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if s.kind != SeriesKind::Bar {
                return None;
            }
            let key = s.stack.clone().unwrap_or_else(|| format!("#series-{i}"));
            Some(match slots.iter().position(|k| *k == key) {
                Some(pos) => pos,
                None => {
                    slots.push(key);
                    slots.len() - 1
                }
            })
        })
        .collect();

    if slots.is_empty() {
        return;
    }

    let slot_w = band * BAR_FILL_RATIO / slots.len() as f32;
    let mut offsets: HashMap<(usize, usize), (f64, f64)> = HashMap::new();

    for (si, s) in option.series.iter().enumerate() {
        let Some(slot) = slot_of[si] else { continue };
        let default = series_color(option, si, p.theme.series_fallback);

        for (i, d) in s.data.iter().enumerate() {
            let v = d.value.as_scalar();
            let (base, top) = if s.stack.is_some() {
                let e = offsets.entry((slot, i)).or_insert((0.0, 0.0));
                if v >= 0.0 {
                    let base = e.1;
                    e.1 += v;
                    (base, e.1)
                } else {
                    let base = e.0;
                    e.0 += v;
                    (base, e.0)
                }
            } else {
                (0.0, v)
            };

            let left = x_at(i) - band * BAR_FILL_RATIO * 0.5 + slot_w * slot as f32;
            let (y0, y1) = (sy(base), sy(top));
            let rect = skia::Rect::from_ltrb(left, y0.min(y1), left + slot_w, y0.max(y1));
            let color = match &d.item_style {
                Some(style) => skia_color(&style.color, default),
                None => default,
            };
            p.canvas.draw_rect(rect, &p.fill(color));
        }
    }
}

fn draw_lines(p: &Painter<'_>, option: &ChartOption, x_at: &dyn Fn(usize) -> f32, sy: &dyn Fn(f64) -> f32) {
    for (si, s) in option.series.iter().enumerate() {
        if s.kind != SeriesKind::Line || s.data.is_empty() {
            continue;
        }
        let color = series_color(option, si, p.theme.series_fallback);
        let points: Vec<(f32, f32)> =
            s.data.iter().enumerate().map(|(i, d)| (x_at(i), sy(d.value.as_scalar()))).collect();

        if points.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            for &pt in points.iter().skip(1) {
                path.line_to(pt);
            }
            p.canvas.draw_path(&path, &p.stroke(color, 2.0));
        }

        let marker_fill = p.fill(p.theme.background);
        let marker_ring = p.stroke(color, 2.0);
        for &pt in &points {
            p.canvas.draw_circle(pt, 3.0, &marker_fill);
            p.canvas.draw_circle(pt, 3.0, &marker_ring);
        }
    }
}
