//! CSV ticket loader.
//!
//! Reads the whole dataset into memory in one pass. Any malformed row aborts
//! the load; there is no partial result.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::types::TicketRecord;

/// Fields per data row: id, fullName, email, country, purchaseTime, amount.
const FIELD_COUNT: usize = 6;

/// Error loading a ticket dataset. All variants are fatal for the load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("cannot open ticket file {path:?}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The source has no rows at all, not even a header.
    #[error("ticket file has no header row")]
    MissingHeader,

    /// The CSV reader rejected the input.
    #[error("malformed csv input: {0}")]
    Malformed(#[from] csv::Error),

    /// A data row does not have exactly 6 fields.
    #[error("row {line} has {found} fields, expected {FIELD_COUNT}")]
    FieldCount { line: usize, found: usize },

    /// The id field is not a base-10 integer.
    #[error("row {line} has a non-numeric id {value:?}")]
    InvalidId { line: usize, value: String },

    /// The amount field is not a base-10 integer.
    #[error("row {line} has a non-numeric amount {value:?}")]
    InvalidAmount { line: usize, value: String },
}

/// Load all ticket records from a CSV file.
///
/// The first row is a header and is skipped without validation. Each data
/// row must carry exactly 6 fields, with `id` and `amount` parseable as
/// `i64`. A header followed by no data rows is a valid, empty dataset.
pub fn load_tickets(path: &Path) -> Result<Vec<TicketRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    // The header row is consumed manually: skipped, never validated.
    // Flexible mode so the field-count check below owns row-width policy.
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = reader.into_records();
    rows.next().ok_or(LoadError::MissingHeader)??;

    let mut tickets = Vec::new();
    for (idx, row) in rows.enumerate() {
        let row = row?;
        // 1-based line number, counting the header as line 1.
        let line = idx + 2;

        if row.len() != FIELD_COUNT {
            return Err(LoadError::FieldCount {
                line,
                found: row.len(),
            });
        }

        let id = row[0].parse::<i64>().map_err(|_| LoadError::InvalidId {
            line,
            value: row[0].to_string(),
        })?;
        let amount = row[5].parse::<i64>().map_err(|_| LoadError::InvalidAmount {
            line,
            value: row[5].to_string(),
        })?;

        tickets.push(TicketRecord {
            id,
            full_name: row[1].to_string(),
            email: row[2].to_string(),
            country: row[3].to_string(),
            purchase_time: row[4].to_string(),
            amount,
        });
    }

    debug!("Loaded {} ticket records from {:?}", tickets.len(), path);
    Ok(tickets)
}
