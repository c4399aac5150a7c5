// File: crates/chart-core/src/types.rs
// Summary: Shared constants (canvas size, palette, default colors).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Series colors, assigned by index and cycled.
pub const PALETTE: [&str; 9] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4", "#ea7ccc",
];

pub const DEFAULT_BAR_COLOR: &str = "#5470c6";
pub const DEFAULT_TEAM_COLOR: &str = "#5470c6";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Alternating radar split-area fills.
pub const DEFAULT_RING_COLORS: [&str; 2] = ["rgba(250, 250, 250, 0.3)", "rgba(200, 200, 200, 0.3)"];

/// Alpha applied to a radar line color when no fill color is given.
pub const RADAR_FILL_ALPHA: f32 = 0.3;
/// Alpha of the "rest" segment of a stacked team bar.
pub const STACK_REST_ALPHA: f32 = 0.5;

/// Palette color for series `index`, cycling.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
