//! Types for query batches and their aggregated report.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::stats::{StatsEngine, StatsError};

/// One query of the fixed batch.
#[derive(Debug, Clone)]
pub enum Query {
    /// Total tickets sold to one destination.
    TotalTickets { destination: String },
    /// Percentage share of one destination against a supplied total.
    DestinationShare { destination: String, total: i64 },
    /// Tickets whose purchase time falls inside one `"H:H"` band.
    TicketsInBand { band: String },
}

impl Query {
    /// Stable label identifying the query in logs and reports.
    pub fn label(&self) -> String {
        match self {
            Query::TotalTickets { .. } => "total-tickets".to_string(),
            Query::DestinationShare { .. } => "destination-share".to_string(),
            Query::TicketsInBand { band } => format!("time-band-{band}"),
        }
    }

    /// Run the query against the engine, capturing the outcome as a value.
    pub fn run(&self, engine: &StatsEngine) -> QueryOutcome {
        let result = match self {
            Query::TotalTickets { destination } => engine
                .total_tickets(destination)
                .map(|count| format!("Total tickets sold to {destination}: {count}")),
            Query::DestinationShare { destination, total } => {
                engine.destination_share(destination, *total).map(|share| {
                    format!(
                        "Share of travelers to {destination} against a total of {total}: {share:.2}%"
                    )
                })
            }
            Query::TicketsInBand { band } => engine
                .tickets_in_band(band)
                .map(|count| format!("Tickets purchased in the {band} band: {count}")),
        };

        QueryOutcome::new(self.label(), result)
    }
}

/// Terminal result of one query.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    /// The query produced a formatted report line.
    Completed { message: String },
    /// The query failed; siblings are unaffected.
    Failed { error: String },
}

/// Outcome of one query in a batch, labeled for the report.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub label: String,
    #[serde(flatten)]
    pub result: QueryResult,
}

impl QueryOutcome {
    pub fn new(label: String, result: Result<String, StatsError>) -> Self {
        let result = match result {
            Ok(message) => QueryResult::Completed { message },
            Err(e) => QueryResult::Failed {
                error: e.to_string(),
            },
        };
        Self { label, result }
    }

    /// The report line, if the query completed.
    pub fn message(&self) -> Option<&str> {
        match &self.result {
            QueryResult::Completed { message } => Some(message),
            QueryResult::Failed { .. } => None,
        }
    }

    /// The error description, if the query failed.
    pub fn error(&self) -> Option<&str> {
        match &self.result {
            QueryResult::Completed { .. } => None,
            QueryResult::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.result, QueryResult::Failed { .. })
    }
}

/// Aggregated outcome of a whole batch.
///
/// The batch as such always succeeds; individual failures are carried as
/// outcomes. Timing fields are observability data, not a correctness
/// property.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(rename = "elapsed_ms", serialize_with = "duration_as_millis")]
    pub elapsed: Duration,
    /// Outcomes in task completion order, which is unspecified.
    pub outcomes: Vec<QueryOutcome>,
}

impl BatchReport {
    /// Outcomes of queries that failed.
    pub fn errors(&self) -> impl Iterator<Item = &QueryOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

fn duration_as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}
