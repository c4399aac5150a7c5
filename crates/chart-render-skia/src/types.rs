// File: crates/chart-render-skia/src/types.rs
// Summary: Screen margins around the plot area.

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for a title above and a legend plus axis labels below.
    fn default() -> Self {
        Self::new(72, 40, 72, 88)
    }
}
