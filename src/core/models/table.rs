//! The abstract table
//!
//! Rows × columns of formatted cells, built by the report assembler and handed
//! to a [`TableRenderer`](crate::core::ports::TableRenderer). Every column holds
//! exactly one cell per row; an absent attribute is an empty cell at the task's
//! own row, so cell and row indices always line up.

use super::color::Color;
use super::sort::SortRule;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Pad on the right
    #[default]
    Left,
    /// Pad on the left
    Right,
}

/// How a column's width is negotiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// As wide as its widest cell
    #[default]
    Minimum,
    /// Takes the remaining width and wraps
    Flexible,
}

/// A single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Display text (may span lines)
    pub text: String,
    /// Source value used by comparators
    pub raw: String,
    /// Cell-specific color
    pub color: Option<Color>,
}

impl Cell {
    /// A cell whose display text is its raw value
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: text.clone(),
            text,
            color: None,
        }
    }

    /// A cell with separate display text and raw value
    #[must_use]
    pub fn formatted(text: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: raw.into(),
            color: None,
        }
    }

    /// An empty cell
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the cell carries nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.raw.is_empty()
    }
}

/// Column header and layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name from the report definition
    pub name: String,
    /// Header label
    pub label: String,
    /// Alignment
    pub justify: Justify,
    /// Width policy
    pub width: WidthPolicy,
    /// Solid header underline
    pub underline: bool,
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// One cell per column
    pub cells: Vec<Cell>,
    /// Row color
    pub color: Option<Color>,
}

/// The abstract table
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    sort_rules: Vec<SortRule>,
    dashed_underline: bool,
    alternate: Option<Color>,
}

impl Table {
    /// A table with `rows` empty rows and no columns
    #[must_use]
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows: vec![Row::default(); rows],
            ..Self::default()
        }
    }

    /// Append a column with one cell per row, returning its index.
    ///
    /// Missing trailing cells are filled with empty cells; extra cells are dropped.
    pub fn add_column(&mut self, column: Column, cells: Vec<Cell>) -> usize {
        let mut cells = cells.into_iter();
        for row in &mut self.rows {
            row.cells.push(cells.next().unwrap_or_default());
        }
        self.columns.push(column);
        self.columns.len() - 1
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column definitions
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in insertion order
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// A single cell
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Index of the named column
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Give one column a solid underline
    pub fn set_column_underline(&mut self, column: usize) {
        if let Some(col) = self.columns.get_mut(column) {
            col.underline = true;
        }
    }

    /// Use a dashed line under the header
    pub const fn set_dashed_underline(&mut self) {
        self.dashed_underline = true;
    }

    /// Whether the header gets a dashed line
    #[must_use]
    pub const fn dashed_underline(&self) -> bool {
        self.dashed_underline
    }

    /// Set a row's color
    pub fn set_row_color(&mut self, row: usize, color: Color) {
        if let Some(r) = self.rows.get_mut(row) {
            r.color = Some(color);
        }
    }

    /// Set a single cell's color
    pub fn set_cell_color(&mut self, row: usize, column: usize, color: Color) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(column)) {
            cell.color = Some(color);
        }
    }

    /// Background for every other rendered row
    pub const fn set_alternate_color(&mut self, color: Color) {
        self.alternate = Some(color);
    }

    /// The alternate row color
    #[must_use]
    pub const fn alternate_color(&self) -> Option<&Color> {
        self.alternate.as_ref()
    }

    /// Register a sort rule; earlier rules take precedence
    pub fn sort_on(&mut self, rule: SortRule) {
        self.sort_rules.push(rule);
    }

    /// Registered sort rules, primary first
    #[must_use]
    pub fn sort_rules(&self) -> &[SortRule] {
        &self.sort_rules
    }
}
