//! Centralized path definitions for taskreport
//!
//! ## Layout
//!
//! ```text
//! ~/.config/taskreport/
//! └── config.toml               # Reports, date formats, colors
//! ~/.local/share/taskreport/
//! └── tasks.toml                # [[task]] entries
//! ```
//!
//! Each path can be overridden by a command-line flag, then by an environment
//! variable.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file
pub const CONFIG_ENV: &str = "TASKREPORT_CONFIG";

/// Environment variable overriding the task file
pub const DATA_ENV: &str = "TASKREPORT_DATA";

const APP_DIR: &str = "taskreport";
const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = "tasks.toml";

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
}

/// Default config file: `~/.config/taskreport/config.toml`
#[must_use]
pub fn default_config() -> PathBuf {
    home().join(".config").join(APP_DIR).join(CONFIG_FILE)
}

/// Default task file: `~/.local/share/taskreport/tasks.toml`
#[must_use]
pub fn default_data() -> PathBuf {
    home().join(".local").join("share").join(APP_DIR).join(DATA_FILE)
}

fn resolve(explicit: Option<&Path>, from_env: Option<OsString>, default: fn() -> PathBuf) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(default)
}

/// Config file: `explicit`, else `$TASKREPORT_CONFIG`, else the default
#[must_use]
pub fn config_file(explicit: Option<&Path>) -> PathBuf {
    resolve(explicit, env::var_os(CONFIG_ENV), default_config)
}

/// Task file: `explicit`, else `$TASKREPORT_DATA`, else the default
#[must_use]
pub fn data_file(explicit: Option<&Path>) -> PathBuf {
    resolve(explicit, env::var_os(DATA_ENV), default_data)
}
