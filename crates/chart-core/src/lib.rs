// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; config schemas, option objects and per-chart builders.

pub mod error;
pub mod color;
pub mod types;
pub mod grid;
pub mod config;
pub mod option;
pub mod chartjs;
pub mod bar;
pub mod line;
pub mod pie;
pub mod stacked_bar;
pub mod radar;
pub mod match_radar;

pub use error::{ChartError, Result};
pub use color::{parse_color, with_alpha, Rgba};
pub use config::{load_config, parse_config};
pub use option::ChartOption;
pub use chartjs::RadarChartConfig;
pub use match_radar::{MatchStats, TeamStats};
