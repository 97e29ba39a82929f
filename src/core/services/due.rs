//! Due-date classification
//!
//! A due date before local midnight today is overdue. One before local midnight
//! `horizon_days` days from today is imminent; a zero horizon makes every due
//! date that is not overdue imminent.

use crate::core::models::{Color, DueState, Task};

use super::dates::{parse_timestamp, start_of_day};

const DAY: i64 = 86_400;

/// Classify a due timestamp relative to `now`
#[must_use]
pub fn classify(due: i64, now: i64, horizon_days: i64) -> DueState {
    let today = start_of_day(now);
    if due < today {
        return DueState::Overdue;
    }
    if horizon_days <= 0 {
        return DueState::Imminent;
    }
    if due < today.saturating_add(horizon_days.saturating_mul(DAY)) {
        DueState::Imminent
    } else {
        DueState::None
    }
}

/// Classify a task's `due` attribute; absent or unparseable is [`DueState::None`]
#[must_use]
pub fn classify_task(task: &Task, now: i64, horizon_days: i64) -> DueState {
    task.get("due")
        .and_then(parse_timestamp)
        .map_or(DueState::None, |due| classify(due, now, horizon_days))
}

/// Color for an urgency state, if it overrides anything
#[must_use]
pub const fn urgency_color<'a>(
    state: DueState,
    due: &'a Color,
    overdue: &'a Color,
) -> Option<&'a Color> {
    match state {
        DueState::Overdue => Some(overdue),
        DueState::Imminent => Some(due),
        DueState::None => None,
    }
}
