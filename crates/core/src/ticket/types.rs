//! Core ticket data types.

/// A single ticket sale, one row of the input dataset.
///
/// `full_name`, `email` and `amount` are not consulted by any current query
/// but are part of the record shape and kept as loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    /// Identifier from the dataset. Uniqueness is not enforced.
    pub id: i64,
    pub full_name: String,
    pub email: String,
    /// Destination country, matched exactly (case-sensitive) by queries.
    pub country: String,
    /// Raw `"H:H"` hour pair. Parsed per query, never normalized.
    pub purchase_time: String,
    pub amount: i64,
}
