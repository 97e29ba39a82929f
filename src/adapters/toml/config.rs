//! TOML configuration source
//!
//! Nested tables flatten to dotted keys, so `[report.list] columns = "id"` and
//! `"report.list.columns" = "id"` are the same setting. Arrays join with `,`
//! and booleans read back as `on`/`off`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::ports::ConfigSource;

/// Configuration loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TomlConfig {
    values: BTreeMap<String, String>,
}

impl TomlConfig {
    /// Load a config file; a missing file is an empty configuration
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config =
            Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("loaded {} setting(s) from {}", config.values.len(), path.display());
        Ok(config)
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut values = BTreeMap::new();
        flatten("", &table, &mut values);
        Ok(Self { values })
    }

    /// Build a configuration from key/value pairs
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Set one key, replacing any existing value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, String>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&key, inner, out),
            other => {
                out.insert(key, scalar(other));
            },
        }
    }
}

fn scalar(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => (if *b { "on" } else { "off" }).to_string(),
        toml::Value::Datetime(d) => d.to_string(),
        toml::Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
        toml::Value::Table(_) => String::new(),
    }
}

impl ConfigSource for TomlConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
