//! Task model
//!
//! A task is a read-only snapshot of attribute name → value pairs, plus the
//! short-lived working-set `id` and its tags. Timestamps are stored as decimal
//! Unix epoch strings, exactly as they appear in the data file.

use std::collections::BTreeMap;

/// Attribute prefix used for annotations (`annotation_<epoch>`)
pub const ANNOTATION_PREFIX: &str = "annotation_";

/// A task snapshot for one report invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Working-set id, 0 when the task has none (completed, deleted)
    pub id: u64,

    attributes: BTreeMap<String, String>,

    tags: Vec<String>,
}

impl Task {
    /// Create a task with the given id and uuid
    #[must_use]
    pub fn new(id: u64, uuid: impl Into<String>) -> Self {
        let mut task = Self {
            id,
            ..Self::default()
        };
        task.set("uuid", uuid);
        task
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style tag setter
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.add_tag(tag);
        self
    }

    /// Set an attribute. Empty values remove it.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.attributes.remove(name);
        } else {
            self.attributes.insert(name.to_string(), value);
        }
    }

    /// Get an attribute value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get an attribute value, or the empty string when absent
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Whether the attribute is present
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The stable identifier
    #[must_use]
    pub fn uuid(&self) -> &str {
        self.get_or_empty("uuid")
    }

    /// Parse a timestamp attribute
    #[must_use]
    pub fn timestamp(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|raw| raw.trim().parse().ok())
    }

    /// Add a tag, ignoring duplicates
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.has_tag(tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Tags in insertion order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the task carries this tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Add an annotation recorded at `entry`
    pub fn annotate(&mut self, entry: i64, text: &str) {
        self.set(&format!("{ANNOTATION_PREFIX}{entry}"), text);
    }

    /// Annotations as `(entry, text)`, oldest first
    #[must_use]
    pub fn annotations(&self) -> Vec<(i64, &str)> {
        let mut annotations: Vec<(i64, &str)> = self
            .attributes
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(ANNOTATION_PREFIX)
                    .and_then(|epoch| epoch.parse().ok())
                    .map(|epoch| (epoch, value.as_str()))
            })
            .collect();
        annotations.sort_by_key(|(epoch, _)| *epoch);
        annotations
    }

    /// Iterate over all attributes
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
