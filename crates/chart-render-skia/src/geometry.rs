// File: crates/chart-render-skia/src/geometry.rs
// Summary: Plot-area rectangle and polar helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Canvas minus insets; collapses to a point rather than inverting.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left);
        let bottom = (height as f32 - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// Point at `radius` from `center`, `angle` radians clockwise from 12 o'clock.
#[inline]
pub fn polar(center: (f32, f32), radius: f32, angle: f32) -> (f32, f32) {
    (center.0 + radius * angle.sin(), center.1 - radius * angle.cos())
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
