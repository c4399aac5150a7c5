// File: crates/chart-scripts/src/stats.rs
// Summary: Reads one match document from MongoDB and reshapes it into head-to-head radar statistics.
// Notes:
// - Stats use the footystats match layout: `team_a_*` is the home side, `team_b_*` the away side.
// - Missing, non-numeric and negative values (the API writes -1 for "unknown") become 0.

use anyhow::{Context, Result};
use mongodb::bson::{doc, Bson, Document};

use chart_core::{MatchStats, TeamStats};

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DATABASE: &str = "footballDB";
pub const COLLECTION: &str = "matches";

/// Radar axis label with the home and away field names it is read from.
pub const STAT_FIELDS: &[(&str, &str, &str)] = &[
    ("Goals", "homeGoalCount", "awayGoalCount"),
    ("Possession", "team_a_possession", "team_b_possession"),
    ("Shots", "team_a_shots", "team_b_shots"),
    ("Shots on Target", "team_a_shotsOnTarget", "team_b_shotsOnTarget"),
    ("Corners", "team_a_corners", "team_b_corners"),
    ("Fouls", "team_a_fouls", "team_b_fouls"),
    ("xG", "team_a_xg", "team_b_xg"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchFilter {
    pub competition_id: i64,
    pub home_id: i64,
    pub away_id: i64,
}

impl Default for MatchFilter {
    fn default() -> Self {
        Self { competition_id: 9660, home_id: 152, away_id: 59 }
    }
}

impl MatchFilter {
    pub fn to_document(&self) -> Document {
        doc! {
            "competition_id": self.competition_id,
            "homeID": self.home_id,
            "awayID": self.away_id,
        }
    }
}

/// Anything that can look up a single match document.
pub trait MatchSource {
    fn fetch_match(&self, filter: &MatchFilter) -> Result<Option<Document>>;
}

pub struct MongoMatchSource {
    client: mongodb::sync::Client,
    database: String,
}

impl MongoMatchSource {
    pub fn connect(uri: &str) -> Result<Self> {
        let client = mongodb::sync::Client::with_uri_str(uri)
            .with_context(|| format!("connecting to {uri}"))?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .with_context(|| format!("connecting to {uri}"))?;
        tracing::info!(uri, "connected to MongoDB");
        Ok(Self { client, database: DATABASE.to_string() })
    }
}

impl MatchSource for MongoMatchSource {
    fn fetch_match(&self, filter: &MatchFilter) -> Result<Option<Document>> {
        let query = filter.to_document();
        tracing::debug!(%query, database = %self.database, collection = COLLECTION, "querying match");
        let found = self
            .client
            .database(&self.database)
            .collection::<Document>(COLLECTION)
            .find_one(query)
            .run()
            .context("querying matches collection")?;
        Ok(found)
    }
}

/// Numeric field as f64; anything unusable reads as 0.
pub fn stat_value(doc: &Document, key: &str) -> f64 {
    let v = match doc.get(key) {
        Some(Bson::Double(v)) => *v,
        Some(Bson::Int32(v)) => *v as f64,
        Some(Bson::Int64(v)) => *v as f64,
        Some(Bson::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn team_name(doc: &Document, key: &str, fallback: &str) -> String {
    doc.get_str(key).map(str::to_string).unwrap_or_else(|_| fallback.to_string())
}

pub fn extract_stats(doc: &Document) -> MatchStats {
    MatchStats {
        labels: STAT_FIELDS.iter().map(|(label, _, _)| label.to_string()).collect(),
        home: TeamStats {
            name: team_name(doc, "home_name", "Home"),
            values: STAT_FIELDS.iter().map(|(_, home, _)| stat_value(doc, home)).collect(),
        },
        away: TeamStats {
            name: team_name(doc, "away_name", "Away"),
            values: STAT_FIELDS.iter().map(|(_, _, away)| stat_value(doc, away)).collect(),
        },
    }
}

/// Fetch the filtered match and reshape it; a missing match is an error.
pub fn load_match_stats(source: &dyn MatchSource, filter: &MatchFilter) -> Result<MatchStats> {
    let doc = source.fetch_match(filter)?.with_context(|| {
        format!(
            "no match found for competition {} home {} away {}",
            filter.competition_id, filter.home_id, filter.away_id
        )
    })?;
    let stats = extract_stats(&doc);
    tracing::info!(home = %stats.home.name, away = %stats.away.name, "loaded match statistics");
    Ok(stats)
}
