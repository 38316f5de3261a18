//! Query operations over a loaded ticket dataset.

use std::collections::HashMap;

use crate::ticket::{Interval, TicketRecord};

use super::StatsError;

/// Holds the loaded records and answers read-only queries over them.
///
/// The record sequence is immutable after construction, so one engine can be
/// shared across concurrent query tasks without locking.
#[derive(Debug)]
pub struct StatsEngine {
    tickets: Vec<TicketRecord>,
}

impl StatsEngine {
    /// Create an engine over an already loaded record sequence.
    pub fn new(tickets: Vec<TicketRecord>) -> Self {
        Self { tickets }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Count tickets whose country equals `destination` exactly.
    ///
    /// The country frequency map only ever contains countries present in the
    /// dataset, so an absent destination fails with
    /// [`StatsError::DestinationNotFound`] rather than counting zero.
    pub fn total_tickets(&self, destination: &str) -> Result<u64, StatsError> {
        let mut by_country: HashMap<&str, u64> = HashMap::new();
        for ticket in &self.tickets {
            *by_country.entry(ticket.country.as_str()).or_insert(0) += 1;
        }

        by_country
            .get(destination)
            .copied()
            .ok_or_else(|| StatsError::DestinationNotFound(destination.to_string()))
    }

    /// Count tickets whose purchase time falls inside the `"H:H"` band.
    ///
    /// Only the start hour of each record's interval is tested against the
    /// band; the record's own end hour does not participate. A record with
    /// an unparseable purchase time aborts the query instead of being
    /// skipped.
    pub fn tickets_in_band(&self, band: &str) -> Result<u64, StatsError> {
        let band: Interval = band.parse()?;

        let mut count = 0;
        for ticket in &self.tickets {
            let slot: Interval = ticket.purchase_time.parse()?;
            if band.covers_hour(slot.start) {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Percentage share of `destination` relative to a caller-supplied
    /// `total`.
    ///
    /// `total` is not derived from the dataset, so the result is not bounded
    /// to 0-100.
    pub fn destination_share(&self, destination: &str, total: i64) -> Result<f64, StatsError> {
        if total <= 0 {
            return Err(StatsError::InvalidTotal(total));
        }

        let mut by_country: HashMap<&str, f64> = HashMap::new();
        for ticket in &self.tickets {
            *by_country.entry(ticket.country.as_str()).or_insert(0.0) += 1.0;
        }

        let matched = by_country
            .get(destination)
            .copied()
            .ok_or_else(|| StatsError::DestinationNotFound(destination.to_string()))?;

        Ok(matched / total as f64 * 100.0)
    }
}
