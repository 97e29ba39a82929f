//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Configuration file and task file
//! - `text_table` - Plain-text table rendering

pub mod text_table;
pub mod toml;

pub use text_table::TextTableRenderer;
pub use self::toml::{TomlConfig, TomlTaskStore};
