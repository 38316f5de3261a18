//! The in-memory statistics engine.

mod engine;

pub use engine::StatsEngine;

use thiserror::Error;

use crate::ticket::IntervalParseError;

/// Errors from a single query. Never fatal for a batch; each query fails on
/// its own.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The destination has no matching records in the dataset.
    #[error("destination not found: {0}")]
    DestinationNotFound(String),

    /// The caller-supplied total for a share computation is not positive.
    #[error("total must be positive, got {0}")]
    InvalidTotal(i64),

    /// A time band or a record's purchase time failed to parse.
    #[error(transparent)]
    Interval(#[from] IntervalParseError),
}
