//! Ticket records, the `"H:H"` interval format, and the CSV loader.

mod csv_loader;
mod interval;
mod types;

pub use csv_loader::{load_tickets, LoadError};
pub use interval::{Interval, IntervalParseError};
pub use types::TicketRecord;
