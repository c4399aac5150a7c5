// File: crates/chart-core/src/match_radar.rs
// Summary: Head-to-head match statistics -> Chart.js-style radar config.

use crate::chartjs::{ChartJsDataset, RadarChartConfig};
use crate::grid::nice_ceil;

pub const OUTPUT_FILE: &str = "radar-chart.png";

pub const HOME_BORDER: &str = "#36a2eb";
pub const HOME_FILL: &str = "rgba(54, 162, 235, 0.2)";
pub const AWAY_BORDER: &str = "#ff6384";
pub const AWAY_FILL: &str = "rgba(255, 99, 132, 0.2)";

/// One side of a match: the team name and one value per stat label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamStats {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchStats {
    pub labels: Vec<String>,
    pub home: TeamStats,
    pub away: TeamStats,
}

impl MatchStats {
    pub fn max_value(&self) -> f64 {
        self.home.values.iter().chain(&self.away.values).copied().fold(0.0, f64::max)
    }
}

fn dataset(team: &TeamStats, border: &str, fill: &str) -> ChartJsDataset {
    ChartJsDataset {
        label: team.name.clone(),
        data: team.values.clone(),
        border_color: border.to_string(),
        background_color: fill.to_string(),
        point_background_color: border.to_string(),
        border_width: 2.0,
    }
}

pub fn build_config(stats: &MatchStats) -> RadarChartConfig {
    let mut config = RadarChartConfig::new(
        stats.labels.clone(),
        vec![
            dataset(&stats.home, HOME_BORDER, HOME_FILL),
            dataset(&stats.away, AWAY_BORDER, AWAY_FILL),
        ],
    );
    config.options.plugins.title.display = true;
    config.options.plugins.title.text = format!("{} vs {}", stats.home.name, stats.away.name);
    config.options.scales.r.suggested_max = Some(nice_ceil(stats.max_value(), 5));
    config
}
