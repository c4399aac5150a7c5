// File: crates/chart-render-skia/src/theme.rs
// Summary: Colors for chart chrome (background, grid, axes, text).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_text: skia::Color,
    pub radar_ring: skia::Color,
    pub series_fallback: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xe0, 0xe6, 0xf1),
            axis_line: skia::Color::from_argb(255, 0x6e, 0x70, 0x79),
            axis_label: skia::Color::from_argb(255, 0x6e, 0x70, 0x79),
            title: skia::Color::from_argb(255, 0x46, 0x46, 0x46),
            legend_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            radar_ring: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            series_fallback: skia::Color::from_argb(255, 0x54, 0x70, 0xc6),
        }
    }
}
