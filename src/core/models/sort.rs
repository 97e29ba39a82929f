//! Sort model types
//!
//! A sort token such as `due+` names a report column and a direction. The
//! column's [`SortFamily`] decides how two cells compare.

use std::cmp::Ordering;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest first (`+`)
    #[default]
    Ascending,
    /// Largest first (`-`)
    Descending,
}

impl Direction {
    /// Direction for a trailing token character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Ascending),
            '-' => Some(Self::Descending),
            _ => None,
        }
    }

    /// Apply this direction to an ascending ordering
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Token suffix for this direction
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Ascending => '+',
            Self::Descending => '-',
        }
    }
}

/// Comparison semantics for a column's values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortFamily {
    /// Integer comparison of the raw value
    Numeric,
    /// Lexical comparison of the displayed text
    Character,
    /// Chronological comparison, missing dates first
    Date,
    /// Chronological comparison, missing due dates always last
    DueDate,
    /// H > M > L > none
    Priority,
    /// Length of a recurrence period
    Period,
}

impl fmt::Display for SortFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Character => "character",
            Self::Date => "date",
            Self::DueDate => "due",
            Self::Priority => "priority",
            Self::Period => "period",
        };
        f.write_str(name)
    }
}

/// A parsed sort token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Column name
    pub column: String,
    /// Sort direction
    pub direction: Direction,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.direction.as_char())
    }
}

/// A sort rule registered on a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRule {
    /// Column index in the table
    pub column: usize,
    /// Comparison family
    pub family: SortFamily,
    /// Direction
    pub direction: Direction,
}
