// File: crates/chart-scripts/src/bin/bar_chart.rs
// Summary: `bar-chart <config.yaml>` renders bar-chart.png from a YAML config.

use std::process::ExitCode;

use chart_core::config::BarChartConfig;
use chart_core::bar;

fn main() -> anyhow::Result<ExitCode> {
    chart_scripts::cli::run_yaml_chart::<BarChartConfig, _>("bar-chart", bar::OUTPUT_FILE, bar::build_option)
}
