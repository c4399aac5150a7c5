// File: crates/chart-scripts/src/bin/pie_chart.rs
// Summary: `pie-chart <config.yaml>` renders pie-chart.png from a YAML config.

use std::process::ExitCode;

use chart_core::config::PieChartConfig;
use chart_core::pie;

fn main() -> anyhow::Result<ExitCode> {
    chart_scripts::cli::run_yaml_chart::<PieChartConfig, _>("pie-chart", pie::OUTPUT_FILE, pie::build_option)
}
