//! Column registry
//!
//! Maps a report column name to its rendering strategy: default label,
//! justification, width policy and the function deriving one cell from a task.
//! Adding a column means adding one entry to [`REGISTRY`].
//!
//! Derivations never skip a row. A task lacking the source attribute gets an
//! empty cell in its own row.

use std::fmt;

use crate::core::models::{Cell, Justify, Task, WidthPolicy};

use super::dates::{
    format_date, format_date_with_time, format_elapsed, format_elapsed_compact, parse_timestamp,
};
use super::description::{AnnotationDetail, full_description};

/// Inputs shared by every column derivation
#[derive(Debug, Clone, Copy)]
pub struct ColumnContext<'a> {
    /// Report name
    pub report: &'a str,
    /// Date format for every date column but `due`
    pub date_format: &'a str,
    /// Date format for the `due` column
    pub due_date_format: &'a str,
    /// Annotation detail for `description`
    pub annotations: AnnotationDetail,
    /// Current time (epoch seconds)
    pub now: i64,
}

type Derive = fn(&Task, &ColumnContext<'_>) -> Cell;

/// A registered column
#[derive(Clone, Copy)]
pub struct ColumnSpec {
    /// Column name used in report definitions
    pub name: &'static str,
    /// Default header label
    pub label: &'static str,
    /// Alignment
    pub justify: Justify,
    /// Width policy
    pub width: WidthPolicy,
    derive: Derive,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("justify", &self.justify)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ColumnSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ColumnSpec {}

impl ColumnSpec {
    const fn new(
        name: &'static str,
        label: &'static str,
        justify: Justify,
        width: WidthPolicy,
        derive: Derive,
    ) -> Self {
        Self {
            name,
            label,
            justify,
            width,
            derive,
        }
    }

    const fn left(name: &'static str, label: &'static str, derive: Derive) -> Self {
        Self::new(name, label, Justify::Left, WidthPolicy::Minimum, derive)
    }

    const fn right(name: &'static str, label: &'static str, derive: Derive) -> Self {
        Self::new(name, label, Justify::Right, WidthPolicy::Minimum, derive)
    }

    /// Derive this column's cell for one task
    #[must_use]
    pub fn cell(&self, task: &Task, ctx: &ColumnContext<'_>) -> Cell {
        (self.derive)(task, ctx)
    }

    /// Derive one cell per task, in task order
    #[must_use]
    pub fn render(&self, tasks: &[Task], ctx: &ColumnContext<'_>) -> Vec<Cell> {
        tasks.iter().map(|task| self.cell(task, ctx)).collect()
    }

    /// Label, layout and cells of this column over the tasks
    #[must_use]
    pub fn render_column(&self, tasks: &[Task], ctx: &ColumnContext<'_>) -> RenderedColumn {
        RenderedColumn {
            label: self.label.to_string(),
            justify: self.justify,
            width: self.width,
            cells: self.render(tasks, ctx),
        }
    }
}

/// Every supported column
pub static REGISTRY: [ColumnSpec; 22] = [
    ColumnSpec::right("id", "ID", id),
    ColumnSpec::left("uuid", "UUID", |t, _| Cell::text(t.uuid())),
    ColumnSpec::left("project", "Project", |t, _| Cell::text(t.get_or_empty("project"))),
    ColumnSpec::left("priority", "Pri", |t, _| Cell::text(t.get_or_empty("priority"))),
    ColumnSpec::left("priority_long", "Pri", priority_long),
    ColumnSpec::right("entry", "Added", |t, c| date(t, "entry", c.date_format)),
    ColumnSpec::right("entry_time", "Added", |t, c| date_time(t, "entry", c.date_format)),
    ColumnSpec::right("start", "Started", |t, c| date(t, "start", c.date_format)),
    ColumnSpec::right("start_time", "Started", |t, c| date_time(t, "start", c.date_format)),
    ColumnSpec::right("end", "Completed", |t, c| date(t, "end", c.date_format)),
    ColumnSpec::right("end_time", "Completed", |t, c| date_time(t, "end", c.date_format)),
    ColumnSpec::left("due", "Due", |t, c| date(t, "due", c.due_date_format)),
    ColumnSpec::right("age", "Age", |t, c| age(t, c, format_elapsed)),
    ColumnSpec::right("age_compact", "Age", |t, c| age(t, c, format_elapsed_compact)),
    ColumnSpec::left("active", "Active", |t, _| flag(t.has("start"), "*")),
    ColumnSpec::left("tags", "Tags", |t, _| Cell::text(t.tags().join(" "))),
    ColumnSpec::new(
        "description_only",
        "Description",
        Justify::Left,
        WidthPolicy::Flexible,
        |t, _| Cell::text(t.get_or_empty("description")),
    ),
    ColumnSpec::new("description", "Description", Justify::Left, WidthPolicy::Flexible, |t, c| {
        Cell::text(full_description(t, c.annotations, c.date_format))
    }),
    ColumnSpec::right("recur", "Recur", |t, _| Cell::text(t.get_or_empty("recur"))),
    ColumnSpec::right("recurrence_indicator", "R", |t, _| flag(t.has("recur"), "R")),
    ColumnSpec::right("tag_indicator", "T", |t, _| flag(t.tag_count() > 0, "+")),
    ColumnSpec::right("wait", "Wait", |t, c| date(t, "wait", c.date_format)),
];

fn id(task: &Task, _: &ColumnContext<'_>) -> Cell {
    if task.id == 0 {
        Cell::formatted("-", "0")
    } else {
        Cell::text(task.id.to_string())
    }
}

fn priority_long(task: &Task, _: &ColumnContext<'_>) -> Cell {
    let raw = task.get_or_empty("priority");
    let long = match raw {
        "H" => "High",
        "M" => "Medium",
        "L" => "Low",
        _ => "",
    };
    Cell::formatted(long, raw)
}

fn flag(present: bool, marker: &str) -> Cell {
    if present { Cell::text(marker) } else { Cell::empty() }
}

fn date(task: &Task, name: &str, format: &str) -> Cell {
    task.get(name)
        .and_then(parse_timestamp)
        .map_or_else(Cell::empty, |ts| Cell::formatted(format_date(ts, format), ts.to_string()))
}

fn date_time(task: &Task, name: &str, format: &str) -> Cell {
    task.get(name).and_then(parse_timestamp).map_or_else(Cell::empty, |ts| {
        Cell::formatted(format_date_with_time(ts, format), ts.to_string())
    })
}

fn age(task: &Task, ctx: &ColumnContext<'_>, format: fn(i64) -> String) -> Cell {
    task.get("entry")
        .and_then(parse_timestamp)
        .map_or_else(Cell::empty, |entry| Cell::text(format(ctx.now.saturating_sub(entry))))
}

/// Look up a column by name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ColumnSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// All column names, in registry order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|spec| spec.name)
}

/// A rendered column, ready to add to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedColumn {
    /// Default header label
    pub label: String,
    /// Alignment
    pub justify: Justify,
    /// Width policy
    pub width: WidthPolicy,
    /// One cell per task
    pub cells: Vec<Cell>,
}

/// Render a named column over the tasks; `None` for unknown names
#[must_use]
pub fn render(name: &str, tasks: &[Task], ctx: &ColumnContext<'_>) -> Option<RenderedColumn> {
    lookup(name).map(|spec| spec.render_column(tasks, ctx))
}
