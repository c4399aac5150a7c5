// File: crates/chart-scripts/src/bin/stacked_bar_chart.rs
// Summary: `stacked-bar-chart <config.yaml>` renders stacked-bar-chart.png from a YAML config.

use std::process::ExitCode;

use chart_core::config::StackedBarConfig;
use chart_core::stacked_bar;

fn main() -> anyhow::Result<ExitCode> {
    chart_scripts::cli::run_yaml_chart::<StackedBarConfig, _>("stacked-bar-chart", stacked_bar::OUTPUT_FILE, stacked_bar::build_option)
}
