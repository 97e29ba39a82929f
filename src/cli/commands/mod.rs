//! Command implementations

mod columns;
mod report;
mod reports;

pub use columns::columns;
pub use report::{ReportArgs, report};
pub use reports::reports;
