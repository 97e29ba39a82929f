//! Report definition validation
//!
//! Each check collects every offender before failing.

use crate::core::ReportError;
use crate::core::models::{Direction, SortKey};

use super::columns::{self, ColumnSpec};

/// Every column must be a registry name; resolves each to its registry entry
pub fn validate_columns(columns: &[String]) -> Result<Vec<&'static ColumnSpec>, ReportError> {
    let mut specs = Vec::with_capacity(columns.len());
    let mut bad = Vec::new();
    for name in columns {
        match columns::lookup(name) {
            Some(spec) => specs.push(spec),
            None => bad.push(name.clone()),
        }
    }
    if bad.is_empty() { Ok(specs) } else { Err(ReportError::UnknownColumns(bad)) }
}

/// A non-empty label list must match the column list in length
pub fn validate_labels(
    report: &str,
    columns: &[String],
    labels: &[String],
) -> Result<(), ReportError> {
    if labels.is_empty() || labels.len() == columns.len() {
        Ok(())
    } else {
        Err(ReportError::LabelMismatch(report.to_string()))
    }
}

/// Every sort token must name a report column and end in `+` or `-`
pub fn validate_sort(columns: &[String], sort: &[String]) -> Result<Vec<SortKey>, ReportError> {
    let mut missing = Vec::new();
    let mut bad_direction = Vec::new();
    let mut keys = Vec::with_capacity(sort.len());

    for token in sort {
        let mut chars = token.chars();
        let last = chars.next_back();
        let column = chars.as_str();

        if !columns.iter().any(|c| c == column) {
            missing.push(token.clone());
            continue;
        }
        match last.and_then(Direction::from_char) {
            Some(direction) => keys.push(SortKey {
                column: column.to_string(),
                direction,
            }),
            None => bad_direction.push(token.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(ReportError::SortColumnsNotInReport(missing));
    }
    if !bad_direction.is_empty() {
        return Err(ReportError::InvalidSortDirection(bad_direction));
    }
    Ok(keys)
}
