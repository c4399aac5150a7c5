// File: crates/chart-scripts/src/bin/radar_chart.rs
// Summary: `radar-chart <config.yaml>` renders radar-chart.png from a YAML config.

use std::process::ExitCode;

use chart_core::config::RadarConfig;
use chart_core::radar;

fn main() -> anyhow::Result<ExitCode> {
    chart_scripts::cli::run_yaml_chart::<RadarConfig, _>("radar-chart", radar::OUTPUT_FILE, radar::build_option)
}
