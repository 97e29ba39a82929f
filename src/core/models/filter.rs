//! Filter terms, id sequences and the ambient filter context
//!
//! The command line and each report's own `filter` setting both parse into a
//! [`FilterContext`]; the report's context is merged into the command line's
//! before tasks are loaded.

use std::collections::BTreeSet;

use super::task::Task;

/// A single filter criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterTerm {
    /// `name:value` equality; an empty value means "absent"
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// `name.any:` presence
    Present(String),
    /// `+tag`
    HasTag(String),
    /// `-tag`
    LacksTag(String),
    /// A word that must occur in the description
    Word(String),
}

impl FilterTerm {
    /// Whether the task satisfies this term
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Attribute { name, value } if value.is_empty() => !task.has(name),
            Self::Attribute { name, value } if name == "project" => {
                task.get("project").is_some_and(|project| {
                    project == value
                        || project.strip_prefix(value.as_str()).is_some_and(|rest| rest.starts_with('.'))
                })
            },
            Self::Attribute { name, value } => task.get(name) == Some(value.as_str()),
            Self::Present(name) => task.has(name),
            Self::HasTag(tag) => task.has_tag(tag),
            Self::LacksTag(tag) => !task.has_tag(tag),
            Self::Word(word) => task
                .get("description")
                .is_some_and(|d| d.to_lowercase().contains(&word.to_lowercase())),
        }
    }
}

/// A conjunction of filter terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    terms: Vec<FilterTerm>,
}

impl Filter {
    /// An empty filter (matches everything)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term
    pub fn push(&mut self, term: FilterTerm) {
        self.terms.push(term);
    }

    /// The terms, in order
    #[must_use]
    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Whether there are no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the task satisfies every term
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.terms.iter().all(|term| term.matches(task))
    }
}

impl Extend<FilterTerm> for Filter {
    fn extend<I: IntoIterator<Item = FilterTerm>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl FromIterator<FilterTerm> for Filter {
    fn from_iter<I: IntoIterator<Item = FilterTerm>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// An ordered, duplicate-free set of task ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    ids: Vec<u64>,
    seen: BTreeSet<u64>,
}

impl Sequence {
    /// Add an id
    pub fn push(&mut self, id: u64) {
        if self.seen.insert(id) {
            self.ids.push(id);
        }
    }

    /// Union with another sequence
    pub fn combine(&mut self, other: &Self) {
        for &id in &other.ids {
            self.push(id);
        }
    }

    /// The ids
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Number of ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Keep only tasks whose id is in the sequence, preserving task order
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.seen.contains(&t.id)).collect()
    }
}

impl FromIterator<u64> for Sequence {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut sequence = Self::default();
        for id in iter {
            sequence.push(id);
        }
        sequence
    }
}

/// Filter, sequence and limit gathered from the command line and the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterContext {
    /// Combined filter terms
    pub filter: Filter,
    /// Combined id sequence
    pub sequence: Sequence,
    /// Explicit `limit:N`
    pub limit: Option<usize>,
}

impl FilterContext {
    /// Merge a report's own filter into this (command-line) context.
    ///
    /// Terms are appended and sequences combined; an existing limit wins.
    pub fn merge(&mut self, report: Self) {
        self.sequence.combine(&report.sequence);
        if self.limit.is_none() {
            self.limit = report.limit;
        }
        self.filter.extend(report.filter.terms);
    }
}
