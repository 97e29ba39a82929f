//! Columns command - list every column a report may use

use taskreport::core::services::REGISTRY;
use taskreport::output::{ColumnInfo, ColumnListResult, OutputMode};

/// Print the column registry
pub fn columns(output_mode: OutputMode) {
    let result = ColumnListResult {
        columns: REGISTRY.iter().map(ColumnInfo::from).collect(),
    };
    result.render(output_mode);
}
