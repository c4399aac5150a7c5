// File: crates/chart-scripts/src/lib.rs
// Summary: Shared plumbing for the chart binaries (argument handling, logging, match statistics).

pub mod cli;
pub mod stats;
