//! Domain models for taskreport
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - a read-only task snapshot
//! - [`Table`] - the abstract table handed to a renderer
//! - [`Color`] - parsed terminal color with blending
//! - [`SortKey`] / [`SortRule`] - symbolic and resolved sort order
//! - [`FilterContext`] - filter terms, id sequence and limit
//! - [`DueState`] - due-date urgency

mod color;
mod due;
mod filter;
mod sort;
mod table;
mod task;

pub use color::{BaseColor, Color, ColorError, Shade};
pub use due::DueState;
pub use filter::{Filter, FilterContext, FilterTerm, Sequence};
pub use sort::{Direction, SortFamily, SortKey, SortRule};
pub use table::{Cell, Column, Justify, Row, Table, WidthPolicy};
pub use task::{ANNOTATION_PREFIX, Task};
