//! TOML task store
//!
//! Tasks live as `[[task]]` entries in one file:
//!
//! ```toml
//! [[task]]
//! uuid = "6f1c..."
//! description = "Pay rent"
//! project = "Home"
//! priority = "H"
//! entry = 1700000000
//! due = 1700600000
//! tags = ["bills"]
//!
//! [[task.annotation]]
//! entry = 1700100000
//! description = "called landlord"
//! ```
//!
//! Pending and waiting tasks without an explicit `id` are numbered in file
//! order; every other task has id 0. Locking creates a `.lock` file next to the
//! data file and fails if one already exists.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::{Filter, Task};
use crate::core::ports::TaskStore;

#[derive(Debug, Default, Deserialize)]
struct TaskFile {
    #[serde(default, rename = "task")]
    tasks: Vec<TaskEntry>,
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    id: Option<u64>,
    uuid: String,
    #[serde(default = "default_status")]
    status: String,
    #[serde(default)]
    description: String,
    project: Option<String>,
    priority: Option<String>,
    entry: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
    wait: Option<i64>,
    due: Option<i64>,
    until: Option<i64>,
    recur: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, rename = "annotation")]
    annotations: Vec<AnnotationEntry>,
    fg: Option<String>,
    bg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnotationEntry {
    entry: i64,
    description: String,
}

fn default_status() -> String {
    "pending".to_string()
}

impl TaskEntry {
    fn numbered(&self) -> bool {
        matches!(self.status.as_str(), "pending" | "waiting")
    }

    fn into_task(self, id: u64) -> Task {
        let mut task = Task::new(id, self.uuid)
            .with("status", self.status)
            .with("description", self.description);

        let text = [
            ("project", self.project),
            ("priority", self.priority),
            ("recur", self.recur),
            ("fg", self.fg),
            ("bg", self.bg),
        ];
        for (name, value) in text {
            if let Some(value) = value {
                task.set(name, value);
            }
        }

        let dates = [
            ("entry", self.entry),
            ("start", self.start),
            ("end", self.end),
            ("wait", self.wait),
            ("due", self.due),
            ("until", self.until),
        ];
        for (name, value) in dates {
            if let Some(value) = value {
                task.set(name, value.to_string());
            }
        }

        for tag in &self.tags {
            task.add_tag(tag);
        }
        for annotation in &self.annotations {
            task.annotate(annotation.entry, &annotation.description);
        }
        task
    }
}

/// Task store backed by a TOML file
#[derive(Debug)]
pub struct TomlTaskStore {
    path: PathBuf,
    lock: Option<PathBuf>,
}

impl TomlTaskStore {
    /// A store reading the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path, lock: None }
    }

    /// Path of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the lock file
    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Whether this store currently holds the lock
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    fn read(&self) -> anyhow::Result<Vec<Task>> {
        if !self.path.exists() {
            log::debug!("no task file at {}", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let file: TaskFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(number(file.tasks))
    }
}

fn number(entries: Vec<TaskEntry>) -> Vec<Task> {
    let taken: Vec<u64> = entries.iter().filter_map(|e| e.id).collect();
    let mut next = 1;
    entries
        .into_iter()
        .map(|entry| {
            let id = match entry.id {
                Some(id) => id,
                None if entry.numbered() => {
                    while taken.contains(&next) {
                        next += 1;
                    }
                    next += 1;
                    next - 1
                },
                None => 0,
            };
            entry.into_task(id)
        })
        .collect()
}

impl TaskStore for TomlTaskStore {
    fn lock(&mut self, enabled: bool) -> anyhow::Result<()> {
        if !enabled || self.lock.is_some() {
            return Ok(());
        }
        let lock = self.lock_path();
        match OpenOptions::new().write(true).create_new(true).open(&lock) {
            Ok(_) => {
                log::debug!("locked {}", lock.display());
                self.lock = Some(lock);
                Ok(())
            },
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                anyhow::bail!("Task file is locked by another process: {}", lock.display())
            },
            Err(e) => Err(e).with_context(|| format!("Failed to create {}", lock.display())),
        }
    }

    fn load(&mut self, filter: &Filter) -> anyhow::Result<Vec<Task>> {
        let tasks = self.read()?;
        let total = tasks.len();
        let matched: Vec<Task> = tasks.into_iter().filter(|t| filter.matches(t)).collect();
        log::debug!("{} of {total} task(s) match the filter", matched.len());
        Ok(matched)
    }

    fn commit(&mut self) -> anyhow::Result<()> {
        // Reports never modify tasks.
        Ok(())
    }

    fn unlock(&mut self) -> anyhow::Result<()> {
        if let Some(lock) = self.lock.take() {
            fs::remove_file(&lock).with_context(|| format!("Failed to remove {}", lock.display()))?;
            log::debug!("unlocked {}", lock.display());
        }
        Ok(())
    }
}

impl Drop for TomlTaskStore {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.take() {
            let _ = fs::remove_file(lock);
        }
    }
}
