//! TOML-backed configuration and task storage
//!
//! - [`config`] - Dotted-key configuration read from a TOML file
//! - [`task_store`] - `TaskStore` implementation over a `[[task]]` file

pub mod config;
pub mod task_store;

pub use config::TomlConfig;
pub use task_store::TomlTaskStore;
