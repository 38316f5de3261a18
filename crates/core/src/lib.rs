//! Aggregate statistics over ticket-sales datasets: record loading, the
//! in-memory query engine, and the concurrent query batch runner.

pub mod config;
pub mod orchestrator;
pub mod stats;
pub mod ticket;

pub use config::{load_config, load_config_from_str, Config, ConfigError};
pub use orchestrator::{
    run_batch, standard_batch, BatchReport, Query, QueryOutcome, QueryResult, TIME_BANDS,
};
pub use stats::{StatsEngine, StatsError};
pub use ticket::{load_tickets, Interval, IntervalParseError, LoadError, TicketRecord};
