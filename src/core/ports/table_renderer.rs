//! Table renderer port

use crate::core::models::Table;

/// Turns the abstract table into text
///
/// Implementations own layout, wrapping and width negotiation. They must honour
/// the table's sort rules and show at most `limit` rows (0 means all).
pub trait TableRenderer {
    /// Render the table
    fn render(&self, table: &Table, limit: usize) -> String;
}
