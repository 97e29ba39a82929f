//! Task store port
//!
//! Defines the interface for loading task snapshots.

use crate::core::models::{Filter, Task};

/// Source of tasks for a report
///
/// The report runs `lock`, `handle_recurrence`, `load`, `commit` and `unlock`
/// once per invocation, in that order. `unlock` is called even when loading
/// fails.
pub trait TaskStore {
    /// Acquire the store lock when `enabled`
    fn lock(&mut self, enabled: bool) -> anyhow::Result<()>;

    /// Expand recurring tasks before loading
    fn handle_recurrence(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Load every task matching the filter, in store order
    fn load(&mut self, filter: &Filter) -> anyhow::Result<Vec<Task>>;

    /// Persist pending changes
    fn commit(&mut self) -> anyhow::Result<()>;

    /// Release the lock, if held
    fn unlock(&mut self) -> anyhow::Result<()>;
}
