// File: crates/chart-scripts/src/bin/line_chart.rs
// Summary: `line-chart <config.yaml>` renders line-chart.png from a YAML config.

use std::process::ExitCode;

use chart_core::config::LineChartConfig;
use chart_core::line;

fn main() -> anyhow::Result<ExitCode> {
    chart_scripts::cli::run_yaml_chart::<LineChartConfig, _>("line-chart", line::OUTPUT_FILE, line::build_option)
}
