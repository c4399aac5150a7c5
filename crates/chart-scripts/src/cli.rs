// File: crates/chart-scripts/src/cli.rs
// Summary: Argument parsing, logging setup and the load -> build -> render flow shared by the YAML scripts.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, FromArgMatches, Parser};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chart_render_skia::{Render, RenderOptions};

/// Output flags shared by every script.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to write the PNG (default: fixed file name in the current directory)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    pub height: i32,

    /// Print the option object as JSON before rendering
    #[arg(long)]
    pub dump_option: bool,
}

impl OutputArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { width: self.width, height: self.height, ..RenderOptions::default() }
    }

    pub fn output_path(&self, default_file: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default_file))
    }
}

#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// Path to the chart's YAML config
    #[arg(value_name = "path/to/config.yaml")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Install a stderr subscriber; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn usage(script: &str) -> String {
    format!("Usage: {script} <path/to/config.yaml>")
}

/// Parse `T` from the process arguments under the given program name.
pub fn parse_args<T: CommandFactory + FromArgMatches>(script: &'static str) -> Result<T> {
    let matches = T::command().name(script).get_matches();
    Ok(T::from_arg_matches(&matches)?)
}

/// Optionally dump, then render `option` to `path`.
pub fn write_chart<O>(option: &O, output: &OutputArgs, path: &Path) -> Result<()>
where
    O: Render + Serialize,
{
    if output.dump_option {
        println!("{}", serde_json::to_string_pretty(option).context("serializing option object")?);
    }
    option
        .render_to_png(&output.render_options(), path)
        .with_context(|| format!("rendering {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Entry point of the YAML scripts: config path -> `build` -> PNG.
/// Without a config path, prints usage and exits with status 1.
pub fn run_yaml_chart<C, O>(script: &'static str, default_file: &str, build: fn(&C) -> O) -> Result<ExitCode>
where
    C: DeserializeOwned + Default,
    O: Render + Serialize,
{
    init_tracing();
    let args: ChartArgs = parse_args(script)?;

    let Some(config_path) = args.config else {
        eprintln!("{}", usage(script));
        return Ok(ExitCode::from(1));
    };

    let config: C = chart_core::load_config(&config_path)?;
    tracing::info!(config = %config_path.display(), "loaded config");

    let option = build(&config);
    let path = args.output.output_path(default_file);
    write_chart(&option, &args.output, &path)?;
    Ok(ExitCode::SUCCESS)
}
