//! Core report engine
//!
//! Pure logic with no I/O. Configuration, task storage and text rendering
//! are reached through the port traits in [`ports`].
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Color, Table, Filter, sort keys)
//! - `services/` - Column registry, sorting, validation and report assembly
//! - `ports/` - Trait definitions for external collaborators

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ReportError;
