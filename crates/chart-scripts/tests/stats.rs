// File: crates/chart-scripts/tests/stats.rs
// Purpose: Match document reshaping and lookup through a fake source.

use std::cell::RefCell;

use anyhow::Result;
use chart_scripts::stats::{
    extract_stats, load_match_stats, stat_value, MatchFilter, MatchSource, MongoMatchSource, STAT_FIELDS,
};
use mongodb::bson::{doc, Document};
use pretty_assertions::assert_eq;

struct FakeSource {
    doc: Option<Document>,
    seen: RefCell<Vec<Document>>,
}

impl MatchSource for FakeSource {
    fn fetch_match(&self, filter: &MatchFilter) -> Result<Option<Document>> {
        self.seen.borrow_mut().push(filter.to_document());
        Ok(self.doc.clone())
    }
}

fn sample_match() -> Document {
    doc! {
        "homeID": 152, "awayID": 59, "competition_id": 9660,
        "home_name": "Arsenal", "away_name": "Chelsea",
        "homeGoalCount": 2, "awayGoalCount": 1,
        "team_a_possession": 58, "team_b_possession": 42,
        "team_a_shots": 17_i64, "team_b_shots": 9_i64,
        "team_a_shotsOnTarget": 6, "team_b_shotsOnTarget": -1,
        "team_a_corners": 7, "team_b_corners": 3,
        "team_a_fouls": "11", "team_b_fouls": "n/a",
        "team_a_xg": 2.14, "team_b_xg": 0.87,
    }
}

#[test]
fn extracts_both_sides_in_label_order() {
    let stats = extract_stats(&sample_match());
    assert_eq!(stats.labels.len(), STAT_FIELDS.len());
    assert_eq!(stats.labels[0], "Goals");
    assert_eq!(stats.home.name, "Arsenal");
    assert_eq!(stats.away.name, "Chelsea");
    assert_eq!(stats.home.values, vec![2.0, 58.0, 17.0, 6.0, 7.0, 11.0, 2.14]);
    // -1 and non-numeric strings read as zero.
    assert_eq!(stats.away.values, vec![1.0, 42.0, 9.0, 0.0, 3.0, 0.0, 0.87]);
}

#[test]
fn missing_fields_fall_back() {
    let stats = extract_stats(&doc! {});
    assert_eq!(stats.home.name, "Home");
    assert_eq!(stats.away.name, "Away");
    assert!(stats.home.values.iter().chain(&stats.away.values).all(|&v| v == 0.0));
    assert_eq!(stat_value(&doc! { "x": f64::NAN }, "x"), 0.0);
}

#[test]
fn filter_document_uses_collection_field_names() {
    let filter = MatchFilter { competition_id: 1, home_id: 2, away_id: 3 };
    assert_eq!(filter.to_document(), doc! { "competition_id": 1_i64, "homeID": 2_i64, "awayID": 3_i64 });
    assert_eq!(MatchFilter::default(), MatchFilter { competition_id: 9660, home_id: 152, away_id: 59 });
}

#[test]
fn load_queries_source_once() {
    let source = FakeSource { doc: Some(sample_match()), seen: RefCell::new(Vec::new()) };
    let stats = load_match_stats(&source, &MatchFilter::default()).unwrap();
    assert_eq!(stats.home.name, "Arsenal");
    assert_eq!(source.seen.borrow().len(), 1);
}

#[test]
fn no_match_is_an_error() {
    let source = FakeSource { doc: None, seen: RefCell::new(Vec::new()) };
    let err = load_match_stats(&source, &MatchFilter::default()).unwrap_err();
    assert!(err.to_string().contains("no match found for competition 9660 home 152 away 59"));
}

#[test]
fn unreachable_server_fails_at_connect() {
    // Nothing listens on port 1; server selection gives up quickly.
    let uri = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";
    let err = match MongoMatchSource::connect(uri) {
        Ok(_) => panic!("connect should fail without a server"),
        Err(err) => err,
    };
    assert!(err.to_string().starts_with("connecting to mongodb://127.0.0.1:1"), "{err:#}");
}
