//! Concurrent query batches over a loaded engine.

mod runner;
mod types;

pub use runner::{run_batch, standard_batch};
pub use types::{BatchReport, Query, QueryOutcome, QueryResult};

/// The four canonical non-overlapping time bands covering a full day.
pub const EARLY_MORNING: &str = "0:6";
pub const MORNING: &str = "7:12";
pub const AFTERNOON: &str = "13:19";
pub const EVENING: &str = "20:23";

pub const TIME_BANDS: [&str; 4] = [EARLY_MORNING, MORNING, AFTERNOON, EVENING];
