//! Report configuration errors
//!
//! Every variant is fatal for the report invocation. Variants that carry a list
//! name every offender found, never just the first.

use thiserror::Error;

/// Errors raised while interpreting a report definition or filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Column names with no registry entry
    #[error("Unrecognized column name: {}", .0.join(", "))]
    UnknownColumns(Vec<String>),

    /// A non-empty label list whose length differs from the column list
    #[error("There are a different number of columns than labels for report '{0}'.")]
    LabelMismatch(String),

    /// Sort tokens whose column is not part of the report
    #[error("Sort column is not part of the report: {}", .0.join(", "))]
    SortColumnsNotInReport(Vec<String>),

    /// Sort tokens not ending in `+` or `-`
    #[error("Sort direction must be '+' or '-': {}", .0.join(", "))]
    InvalidSortDirection(Vec<String>),

    /// No report with this name is configured
    #[error("Unrecognized report name: {0}")]
    UnknownReport(String),

    /// A `limit:` term that is not a number
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// An id sequence with a reversed range
    #[error("Invalid id sequence: {0}")]
    InvalidSequence(String),
}
