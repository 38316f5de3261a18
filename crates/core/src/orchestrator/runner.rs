//! Concurrent batch runner.
//!
//! One tokio task per query, all reading the same immutable engine. Errors
//! are logged as tasks join and aggregated into the report; they never abort
//! the batch or cancel sibling queries.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::config::Config;
use crate::stats::StatsEngine;

use super::types::{BatchReport, Query, QueryOutcome};
use super::TIME_BANDS;

/// The fixed batch of a typical invocation: one total, one share, and one
/// count per canonical time band.
pub fn standard_batch(config: &Config) -> Vec<Query> {
    let mut queries = vec![
        Query::TotalTickets {
            destination: config.destination.clone(),
        },
        Query::DestinationShare {
            destination: config.destination.clone(),
            total: config.total,
        },
    ];
    queries.extend(TIME_BANDS.iter().map(|band| Query::TicketsInBand {
        band: (*band).to_string(),
    }));
    queries
}

/// Run every query of the batch concurrently and wait for all of them.
///
/// Once spawned, a query runs to completion; one failure does not cancel the
/// others, and the batch itself always produces a report. Outcomes are
/// collected in completion order.
pub async fn run_batch(engine: Arc<StatsEngine>, queries: Vec<Query>) -> BatchReport {
    let started_at = Utc::now();
    let timer = Instant::now();

    let mut tasks = JoinSet::new();
    for query in queries {
        let engine = Arc::clone(&engine);
        tasks.spawn(async move { query.run(&engine) });
    }

    let mut outcomes: Vec<QueryOutcome> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => {
                if let Some(err) = outcome.error() {
                    error!("Query {} failed: {}", outcome.label, err);
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                // A panicked query yields no outcome but does not abort the
                // batch.
                error!("Query task aborted: {}", e);
            }
        }
    }

    let report = BatchReport {
        started_at,
        finished_at: Utc::now(),
        elapsed: timer.elapsed(),
        outcomes,
    };
    debug!(
        "Batch finished: {} outcomes, {} errors, {:?} elapsed",
        report.outcomes.len(),
        report.error_count(),
        report.elapsed
    );
    report
}
