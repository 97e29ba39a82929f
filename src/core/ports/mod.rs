//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the report engine and the
//! systems it consumes (configuration, task storage, text layout).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete implementations,
//! so tests can drive it with in-memory stores and fixed configuration.

mod config_source;
mod table_renderer;
mod task_store;

pub use config_source::ConfigSource;
pub use table_renderer::TableRenderer;
pub use task_store::TaskStore;
