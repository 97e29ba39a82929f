//! Task-level auto-colorization rules
//!
//! Rules blend in a fixed order, so later rules win where they set a
//! foreground or background: tagged, priority, active, project, tags,
//! keywords, recurring.

use std::collections::BTreeMap;

use crate::core::models::{Color, Task};

/// Configured colorization rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRules {
    /// `color.tagged`
    pub tagged: Color,
    /// `color.pri.H`
    pub pri_high: Color,
    /// `color.pri.M`
    pub pri_medium: Color,
    /// `color.pri.L`
    pub pri_low: Color,
    /// `color.pri.none`
    pub pri_none: Color,
    /// `color.active`
    pub active: Color,
    /// `color.recurring`
    pub recurring: Color,
    /// `color.project.<name>`
    pub projects: BTreeMap<String, Color>,
    /// `color.tag.<name>`
    pub tags: BTreeMap<String, Color>,
    /// `color.keyword.<word>`
    pub keywords: BTreeMap<String, Color>,
}

fn apply(color: &mut Color, rule: &Color) {
    if rule.nontrivial() {
        color.blend(rule);
    }
}

/// Starting color from the task's own `fg`/`bg` attributes
#[must_use]
pub fn task_color(task: &Task) -> Color {
    let spec = format!("{} {}", task.get_or_empty("fg"), task.get_or_empty("bg"));
    Color::parse_lossy(spec.trim())
}

/// Blend every matching rule into `color`
pub fn colorize(task: &Task, rules: &ColorRules, color: &mut Color) {
    if task.tag_count() > 0 {
        apply(color, &rules.tagged);
    }

    let priority = match task.get("priority") {
        Some("H") => &rules.pri_high,
        Some("M") => &rules.pri_medium,
        Some("L") => &rules.pri_low,
        _ => &rules.pri_none,
    };
    apply(color, priority);

    if task.has("start") {
        apply(color, &rules.active);
    }

    if let Some(rule) = task.get("project").and_then(|p| rules.projects.get(p)) {
        apply(color, rule);
    }

    for tag in task.tags() {
        if let Some(rule) = rules.tags.get(tag) {
            apply(color, rule);
        }
    }

    let description = task.get_or_empty("description").to_lowercase();
    for (word, rule) in &rules.keywords {
        if description.contains(&word.to_lowercase()) {
            apply(color, rule);
        }
    }

    if task.has("recur") {
        apply(color, &rules.recurring);
    }
}
