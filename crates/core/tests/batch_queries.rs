//! End-to-end coverage of load -> engine -> batch -> report.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use faretally_core::{
    load_tickets, run_batch, standard_batch, Config, LoadError, StatsEngine, TIME_BANDS,
};

/// Writes a small dataset to disk and hands out engines over it.
struct TestHarness {
    file: NamedTempFile,
}

impl TestHarness {
    fn new(rows: &[&str]) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "id,fullName,email,country,purchaseTime,amount").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        Self { file }
    }

    fn engine(&self) -> Arc<StatsEngine> {
        let tickets = load_tickets(self.file.path()).expect("Failed to load tickets");
        Arc::new(StatsEngine::new(tickets))
    }

    fn config(destination: &str, total: i64) -> Config {
        Config {
            destination: destination.to_string(),
            total,
            ..Config::default()
        }
    }
}

#[tokio::test]
async fn full_batch_over_loaded_dataset() {
    let harness = TestHarness::new(&[
        "1,Tait Mcgyver,tmcgyver0@yahoo.com,Brazil,8:10,550",
        "2,Padget Jarrell,pjarrell1@nba.com,Brazil,21:16,730",
        "3,Olia Elgar,oelgar2@ow.ly,Chile,3:45,610",
        "4,Haskell Bbetts,hbetts3@bbb.org,Brazil,13:0,820",
    ]);

    let report = run_batch(
        harness.engine(),
        standard_batch(&TestHarness::config("Brazil", 1000)),
    )
    .await;

    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.error_count(), 0);

    let messages: Vec<_> = report.outcomes.iter().filter_map(|o| o.message()).collect();
    assert!(messages.contains(&"Total tickets sold to Brazil: 3"));
    assert!(messages.contains(&"Share of travelers to Brazil against a total of 1000: 0.30%"));
    assert!(messages.contains(&"Tickets purchased in the 0:6 band: 1"));
    assert!(messages.contains(&"Tickets purchased in the 7:12 band: 1"));
    assert!(messages.contains(&"Tickets purchased in the 13:19 band: 1"));
    assert!(messages.contains(&"Tickets purchased in the 20:23 band: 1"));
}

#[tokio::test]
async fn batch_with_unknown_destination_reports_partial_errors() {
    let harness = TestHarness::new(&["1,Olia Elgar,oelgar2@ow.ly,Chile,3:45,610"]);

    let report = run_batch(
        harness.engine(),
        standard_batch(&TestHarness::config("Peru", 1000)),
    )
    .await;

    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.error_count(), 2);
    for outcome in report.errors() {
        assert_eq!(outcome.error(), Some("destination not found: Peru"));
    }
}

#[tokio::test]
async fn malformed_record_time_fails_only_band_queries() {
    // "24h" parses for no band query, but the destination queries never
    // look at purchase_time and still succeed.
    let harness = TestHarness::new(&["1,Olia Elgar,oelgar2@ow.ly,Chile,24h,610"]);

    let report = run_batch(
        harness.engine(),
        standard_batch(&TestHarness::config("Chile", 1000)),
    )
    .await;

    assert_eq!(report.error_count(), TIME_BANDS.len());
    let completed: Vec<_> = report.outcomes.iter().filter_map(|o| o.message()).collect();
    assert!(completed.contains(&"Total tickets sold to Chile: 1"));
}

#[tokio::test]
async fn report_serializes_to_json() {
    let harness = TestHarness::new(&["1,Tait Mcgyver,tmcgyver0@yahoo.com,Brazil,8:10,550"]);

    let report = run_batch(
        harness.engine(),
        standard_batch(&TestHarness::config("Brazil", 1000)),
    )
    .await;

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["elapsed_ms"].is_number());
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 6);
    assert!(json["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .all(|o| o["status"] == "completed"));
}

#[test]
fn load_failure_retains_nothing() {
    let harness = TestHarness::new(&[
        "1,Tait Mcgyver,tmcgyver0@yahoo.com,Brazil,8:10,550",
        "two,Padget Jarrell,pjarrell1@nba.com,Brazil,21:16,730",
    ]);

    let err = load_tickets(harness.file.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidId { line: 3, .. }));
}
