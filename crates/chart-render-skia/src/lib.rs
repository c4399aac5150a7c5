// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes chart option objects off-screen into RGBA or PNG.

pub mod types;
pub mod geometry;
pub mod theme;
pub mod text;
pub mod render;
pub mod option;
pub mod cartesian;
pub mod pie;
pub mod radar;

pub use render::{skia_color, Painter, Render, RenderOptions};
pub use radar::RadarScene;
pub use theme::Theme;
pub use types::Insets;
