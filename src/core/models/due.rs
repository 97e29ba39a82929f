//! Due-date urgency

use std::fmt;

/// Urgency of a task's due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DueState {
    /// No due date, or due beyond the horizon
    #[default]
    None = 0,
    /// Due within the configured horizon
    Imminent = 1,
    /// Due before today
    Overdue = 2,
}

impl fmt::Display for DueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Imminent => write!(f, "imminent"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}
