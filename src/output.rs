//! Output formatting for human and JSON modes
//!
//! Each command produces a serializable result that renders either as the
//! plain text a terminal user expects or as pretty-printed JSON.

use serde::Serialize;

use crate::config::ReportDefinition;
use crate::core::models::{Justify, WidthPolicy};
use crate::core::services::columns::ColumnSpec;
use crate::core::services::{ReportOutput, ordered_rows};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of running a report
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// Report name
    pub report: String,
    /// Matched tasks, before the row limit
    pub count: usize,
    /// Row limit (0 = all)
    pub limit: usize,
    /// Header labels
    pub labels: Vec<String>,
    /// Displayed rows in sorted order, one string per column
    pub rows: Vec<Vec<String>>,
    /// Rendered text
    #[serde(skip)]
    pub text: String,
}

impl ReportResult {
    /// Collect the displayed rows of a report run
    #[must_use]
    pub fn from_output(report: &str, output: &ReportOutput) -> Self {
        let table = &output.table;
        let mut order = ordered_rows(table);
        if output.limit > 0 {
            order.truncate(output.limit);
        }
        let rows = order
            .into_iter()
            .filter_map(|row| table.rows().get(row))
            .map(|row| row.cells.iter().map(|cell| cell.text.clone()).collect())
            .collect();

        Self {
            report: report.to_string(),
            count: output.count(),
            limit: output.limit,
            labels: table.columns().iter().map(|c| c.label.clone()).collect(),
            rows,
            text: output.text.clone(),
        }
    }

    /// Whether the report matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.text),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A registered column
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Default label
    pub label: String,
    /// `left` or `right`
    pub justify: String,
    /// Whether the column wraps to fill the width
    pub flexible: bool,
}

impl From<&ColumnSpec> for ColumnInfo {
    fn from(spec: &ColumnSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            justify: match spec.justify {
                Justify::Left => "left",
                Justify::Right => "right",
            }
            .to_string(),
            flexible: spec.width == WidthPolicy::Flexible,
        }
    }
}

/// Result of the columns command
#[derive(Debug, Serialize)]
pub struct ColumnListResult {
    /// Every registered column
    pub columns: Vec<ColumnInfo>,
}

impl ColumnListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let width = self.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for column in &self.columns {
            println!("{:width$}  {}", column.name, column.label);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A configured report
#[derive(Debug, Serialize)]
pub struct ReportInfo {
    /// Report name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Column list
    pub columns: String,
    /// Sort list
    pub sort: String,
    /// Filter
    pub filter: String,
}

impl From<&ReportDefinition> for ReportInfo {
    fn from(report: &ReportDefinition) -> Self {
        Self {
            name: report.name.clone(),
            description: report.description.clone(),
            columns: report.columns.clone(),
            sort: report.sort.clone(),
            filter: report.filter.clone(),
        }
    }
}

/// Result of the reports command
#[derive(Debug, Serialize)]
pub struct ReportListResult {
    /// Every configured report, by name
    pub reports: Vec<ReportInfo>,
}

impl ReportListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.reports.is_empty() {
            println!("No reports configured.");
            return;
        }
        let width = self.reports.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for report in &self.reports {
            println!("{:width$}  {}", report.name, report.description);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
