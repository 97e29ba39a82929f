//! Full task descriptions with annotations

use std::fmt;
use std::str::FromStr;

use crate::core::models::Task;

use super::dates::format_date;

/// How much annotation detail the `description` column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationDetail {
    /// Every annotation, oldest first
    #[default]
    Full,
    /// Only the newest annotation, with a `+` marker when there are more
    Sparse,
    /// No annotations
    None,
}

impl FromStr for AnnotationDetail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "sparse" => Ok(Self::Sparse),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid annotation detail: {s}. Use: full, sparse, none")),
        }
    }
}

impl fmt::Display for AnnotationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Sparse => write!(f, "sparse"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Description followed by annotation lines (`<date> <text>`)
#[must_use]
pub fn full_description(task: &Task, detail: AnnotationDetail, date_format: &str) -> String {
    let mut description = task.get_or_empty("description").to_string();
    let annotations = task.annotations();
    if annotations.is_empty() {
        return description;
    }

    match detail {
        AnnotationDetail::None => {},
        AnnotationDetail::Sparse => {
            if annotations.len() > 1 {
                description.insert(0, '+');
            }
            if let Some((entry, text)) = annotations.last() {
                description.push_str(&format!("\n{} {text}", format_date(*entry, date_format)));
            }
        },
        AnnotationDetail::Full => {
            for (entry, text) in &annotations {
                description.push_str(&format!("\n{} {text}", format_date(*entry, date_format)));
            }
        },
    }
    description
}
