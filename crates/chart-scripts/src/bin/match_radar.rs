// File: crates/chart-scripts/src/bin/match_radar.rs
// Summary: Reads one match's team statistics from MongoDB and renders a head-to-head radar PNG.

use clap::Parser;

use chart_core::match_radar;
use chart_scripts::cli::{self, OutputArgs};
use chart_scripts::stats::{self, MatchFilter, MongoMatchSource, DEFAULT_MONGO_URI};

#[derive(Parser, Debug)]
struct Args {
    /// Competition the match belongs to
    #[arg(long, default_value_t = MatchFilter::default().competition_id)]
    competition_id: i64,

    /// Home team id
    #[arg(long, default_value_t = MatchFilter::default().home_id)]
    home_id: i64,

    /// Away team id
    #[arg(long, default_value_t = MatchFilter::default().away_id)]
    away_id: i64,

    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", default_value = DEFAULT_MONGO_URI)]
    mongo_uri: String,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    let args: Args = cli::parse_args("match-radar")?;

    let filter = MatchFilter {
        competition_id: args.competition_id,
        home_id: args.home_id,
        away_id: args.away_id,
    };

    let source = MongoMatchSource::connect(&args.mongo_uri)?;
    let stats = stats::load_match_stats(&source, &filter)?;
    drop(source);
    tracing::debug!("MongoDB connection closed");

    let config = match_radar::build_config(&stats);
    let path = args.output.output_path(match_radar::OUTPUT_FILE);
    cli::write_chart(&config, &args.output, &path)
}
