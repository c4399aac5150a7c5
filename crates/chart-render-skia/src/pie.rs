// File: crates/chart-render-skia/src/pie.rs
// Summary: Pie series: slices clockwise from 12 o'clock with "name: pct%" labels.

use skia_safe as skia;

use chart_core::option::{ChartOption, SeriesKind};
use chart_core::types::palette_color;

use crate::geometry::polar;
use crate::render::{skia_color, Painter};
use crate::text::Align;

const DEFAULT_RADIUS: f32 = 0.75;
const LABEL_SIZE: f32 = 12.0;

/// Parse "60%" into a fraction of the available half-extent; bare numbers are pixels.
fn radius_px(spec: Option<&str>, half_extent: f32) -> f32 {
    let Some(spec) = spec.map(str::trim) else { return half_extent * DEFAULT_RADIUS };
    if let Some(pct) = spec.strip_suffix('%') {
        if let Ok(v) = pct.trim().parse::<f32>() {
            return half_extent * (v / 100.0);
        }
    } else if let Ok(px) = spec.parse::<f32>() {
        return px;
    }
    tracing::warn!(radius = spec, "unparseable pie radius");
    half_extent * DEFAULT_RADIUS
}

pub fn draw(p: &Painter<'_>, option: &ChartOption) {
    let Some(series) = option.series.iter().find(|s| s.kind == SeriesKind::Pie) else { return };

    let center = p.plot.center();
    let half = p.plot.width().min(p.plot.height()) * 0.5;
    let radius = radius_px(series.radius.as_deref(), half);
    let oval = skia::Rect::from_ltrb(center.0 - radius, center.1 - radius, center.0 + radius, center.1 + radius);

    // Negative slices have no meaningful angle; they count as zero.
    let total: f64 = series.data.iter().map(|d| d.value.as_scalar().max(0.0)).sum();
    if total <= 0.0 {
        p.canvas.draw_circle(center, radius, &p.stroke(p.theme.grid, 1.0));
        return;
    }

    let edge = p.stroke(p.theme.background, 1.0);
    let mut start = -90.0f32;
    for (i, d) in series.data.iter().enumerate() {
        let v = d.value.as_scalar().max(0.0);
        if v <= 0.0 {
            continue;
        }
        let sweep = (v / total) as f32 * 360.0;
        let color = skia_color(d.color_or(palette_color(i)), p.theme.series_fallback);
        p.canvas.draw_arc(oval, start, sweep, true, &p.fill(color));
        p.canvas.draw_arc(oval, start, sweep, true, &edge);

        // Label outside the rim at the slice midpoint; angle measured from 12 o'clock.
        let mid = (start + sweep * 0.5 + 90.0).to_radians();
        let anchor = polar(center, radius + 18.0, mid);
        let align = if mid.sin() >= 0.0 { Align::Left } else { Align::Right };
        let pct = v / total * 100.0;
        let text = format!("{}: {:.1}%", d.name.as_deref().unwrap_or(""), pct);
        p.label(&text, anchor.0, anchor.1 + 4.0, LABEL_SIZE, p.theme.legend_text, align);

        start += sweep;
    }
}
