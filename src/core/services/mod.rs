//! Business logic services
//!
//! Pure logic that operates on domain models. Nothing here performs I/O;
//! the assembler reaches the task store and renderer through ports.
//!
//! - [`assembler`] - Run a named report end to end
//! - [`autocolor`] - Task-level colorization rules
//! - [`columns`] - Column registry
//! - [`dates`] - Date parsing and formatting
//! - [`description`] - Descriptions with annotations
//! - [`due`] - Due-date urgency classification
//! - [`filter_parser`] - Filter word parsing
//! - [`sort`] - Sort-key mapping and row ordering
//! - [`validation`] - Report definition checks

pub mod assembler;
pub mod autocolor;
pub mod columns;
pub mod dates;
pub mod description;
pub mod due;
pub mod filter_parser;
pub mod sort;
pub mod validation;

pub use assembler::{ReportAssembler, ReportLayout, ReportOutcome, ReportOutput};
pub use autocolor::ColorRules;
pub use columns::{ColumnContext, ColumnSpec, REGISTRY};
pub use description::AnnotationDetail;
pub use due::{classify, classify_task};
pub use filter_parser::{parse_filter_string, parse_words};
pub use sort::ordered_rows;
pub use validation::{validate_columns, validate_labels, validate_sort};
