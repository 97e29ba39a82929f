//! Report assembly
//!
//! Runs a named report: validates its definition, merges its filter into the
//! command-line context, loads tasks, builds the abstract table, decorates it
//! and hands it to the renderer.

use anyhow::Context;

use crate::config::{ReportDefinition, Settings};
use crate::core::ReportError;
use crate::core::models::{Column, FilterContext, SortKey, Table, Task};
use crate::core::ports::{TableRenderer, TaskStore};

use super::autocolor::{colorize, task_color};
use super::columns::{ColumnContext, ColumnSpec};
use super::due::{classify_task, urgency_color};
use super::filter_parser::parse_filter_string;
use super::sort;
use super::validation::{validate_columns, validate_labels, validate_sort};

/// Message shown when a report selects no tasks
pub const NO_MATCHES: &str = "No matches.";

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A validated report definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    /// Registry entries for the report's columns, in display order
    pub columns: Vec<&'static ColumnSpec>,
    /// Header labels; empty to use each column's default
    pub labels: Vec<String>,
    /// Sort keys, primary first
    pub sort: Vec<SortKey>,
}

impl ReportLayout {
    /// Parse and validate a report's column, label and sort lists
    pub fn from_definition(report: &ReportDefinition) -> Result<Self, ReportError> {
        let columns = split_list(&report.columns);
        let labels = split_list(&report.labels);
        let sort_tokens = split_list(&report.sort);

        let specs = validate_columns(&columns)?;
        validate_labels(&report.name, &columns, &labels)?;
        let sort = validate_sort(&columns, &sort_tokens)?;

        Ok(Self {
            columns: specs,
            labels,
            sort,
        })
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str).filter(|l| !l.is_empty())
    }
}

/// How a report run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// A table of `count` matched tasks was rendered
    Rendered {
        /// Matched tasks, before the row limit
        count: usize,
    },
    /// No task matched
    NoMatches,
}

/// Result of running a report
#[derive(Debug, Clone)]
pub struct ReportOutput {
    /// How the run ended
    pub outcome: ReportOutcome,
    /// Rendered text, without a trailing newline
    pub text: String,
    /// The assembled table
    pub table: Table,
    /// Row limit applied when rendering (0 = all)
    pub limit: usize,
}

impl ReportOutput {
    /// Process exit status: 1 when nothing matched
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.outcome {
            ReportOutcome::Rendered { .. } => 0,
            ReportOutcome::NoMatches => 1,
        }
    }

    /// Number of matched tasks
    #[must_use]
    pub const fn count(&self) -> usize {
        match self.outcome {
            ReportOutcome::Rendered { count } => count,
            ReportOutcome::NoMatches => 0,
        }
    }
}

/// Runs reports against explicit settings and a renderer
#[derive(Clone, Copy)]
pub struct ReportAssembler<'a> {
    settings: &'a Settings,
    renderer: &'a dyn TableRenderer,
    now: i64,
}

impl std::fmt::Debug for ReportAssembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportAssembler").field("now", &self.now).finish_non_exhaustive()
    }
}

impl<'a> ReportAssembler<'a> {
    /// An assembler evaluating ages and due dates against the current time
    #[must_use]
    pub fn new(settings: &'a Settings, renderer: &'a dyn TableRenderer) -> Self {
        Self {
            settings,
            renderer,
            now: chrono::Utc::now().timestamp(),
        }
    }

    /// Evaluate ages and due dates against a fixed time instead
    #[must_use]
    pub const fn at(mut self, now: i64) -> Self {
        self.now = now;
        self
    }

    /// Run a report, loading its tasks from the store
    ///
    /// The store is locked (when `locking` is on), recurrence is expanded,
    /// tasks are loaded and changes committed. The lock is released even when
    /// loading fails.
    pub fn handle(
        &self,
        name: &str,
        context: FilterContext,
        store: &mut dyn TaskStore,
    ) -> anyhow::Result<ReportOutput> {
        let (report, layout, context) = self.prepare(name, context)?;
        let tasks = self.load(store, &context)?;
        Ok(self.assemble(report, &layout, &context, tasks))
    }

    /// Run a report over already-loaded tasks
    ///
    /// The merged filter is applied to `tasks` before the table is built.
    pub fn run(
        &self,
        name: &str,
        context: FilterContext,
        tasks: Vec<Task>,
    ) -> Result<ReportOutput, ReportError> {
        let (report, layout, context) = self.prepare(name, context)?;
        let tasks = tasks.into_iter().filter(|t| context.filter.matches(t)).collect();
        Ok(self.assemble(report, &layout, &context, tasks))
    }

    fn prepare(
        &self,
        name: &str,
        mut context: FilterContext,
    ) -> Result<(&'a ReportDefinition, ReportLayout, FilterContext), ReportError> {
        let report = self.settings.report(name)?;
        let layout = ReportLayout::from_definition(report)?;
        context.merge(parse_filter_string(&report.filter)?);
        log::debug!(
            "report '{name}': {} column(s), {} sort key(s), {} filter term(s)",
            layout.columns.len(),
            layout.sort.len(),
            context.filter.terms().len()
        );
        Ok((report, layout, context))
    }

    fn load(&self, store: &mut dyn TaskStore, context: &FilterContext) -> anyhow::Result<Vec<Task>> {
        store.lock(self.settings.locking).context("Failed to lock task store")?;
        let loaded = load_unlocked(store, context);
        let unlocked = store.unlock().context("Failed to unlock task store");
        let tasks = loaded?;
        unlocked?;
        log::debug!("loaded {} task(s)", tasks.len());
        Ok(tasks)
    }

    fn assemble(
        &self,
        report: &ReportDefinition,
        layout: &ReportLayout,
        context: &FilterContext,
        tasks: Vec<Task>,
    ) -> ReportOutput {
        let tasks = if context.sequence.is_empty() {
            tasks
        } else {
            context.sequence.apply(tasks)
        };

        let mut table = self.build_table(report, layout, &tasks);
        self.underline(&mut table);
        sort::register(&mut table, &layout.sort);
        if self.settings.color {
            self.apply_colors(&mut table, &tasks);
        }

        let limit = context.limit.unwrap_or(report.limit);
        log::debug!("rendering {} row(s), limit {limit}", table.row_count());

        let count = table.row_count();
        if count == 0 {
            return ReportOutput {
                outcome: ReportOutcome::NoMatches,
                text: NO_MATCHES.to_string(),
                table,
                limit,
            };
        }

        let blank = if self.settings.blank_lines { "\n" } else { "" };
        let mut text = String::from(blank);
        text.push_str(&self.renderer.render(&table, limit));
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(blank);
        text.push_str(&format!("{count} {}", if count == 1 { "task" } else { "tasks" }));

        ReportOutput {
            outcome: ReportOutcome::Rendered { count },
            text,
            table,
            limit,
        }
    }

    fn build_table(&self, report: &ReportDefinition, layout: &ReportLayout, tasks: &[Task]) -> Table {
        let ctx = ColumnContext {
            report: &report.name,
            date_format: &self.settings.date_format,
            due_date_format: self.settings.due_date_format(report),
            annotations: self.settings.annotation_detail(report),
            now: self.now,
        };

        let mut table = Table::with_rows(tasks.len());
        for (index, spec) in layout.columns.iter().enumerate() {
            let rendered = spec.render_column(tasks, &ctx);
            let label = layout.label(index).map_or(rendered.label, ToString::to_string);
            table.add_column(
                Column {
                    name: spec.name.to_string(),
                    label,
                    justify: rendered.justify,
                    width: rendered.width,
                    underline: false,
                },
                rendered.cells,
            );
        }
        table
    }

    fn underline(&self, table: &mut Table) {
        if self.settings.color && self.settings.font_underline {
            for column in 0..table.column_count() {
                table.set_column_underline(column);
            }
        } else {
            table.set_dashed_underline();
        }
    }

    fn apply_colors(&self, table: &mut Table, tasks: &[Task]) {
        let settings = self.settings;
        let due_column = table.column_index("due");

        for (row, task) in tasks.iter().enumerate() {
            let mut color = task_color(task);
            colorize(task, &settings.color_rules, &mut color);
            if color.nontrivial() {
                table.set_row_color(row, color);
            }

            let Some(column) = due_column else { continue };
            let state = classify_task(task, self.now, settings.due_horizon_days);
            if let Some(urgency) = urgency_color(state, &settings.color_due, &settings.color_overdue) {
                table.set_cell_color(row, column, color.blended(urgency));
            }
        }

        if settings.color_alternate.nontrivial() {
            table.set_alternate_color(settings.color_alternate);
        }
    }
}

fn load_unlocked(store: &mut dyn TaskStore, context: &FilterContext) -> anyhow::Result<Vec<Task>> {
    store.handle_recurrence().context("Failed to expand recurring tasks")?;
    let tasks = store.load(&context.filter).context("Failed to load tasks")?;
    store.commit().context("Failed to commit task store")?;
    Ok(tasks)
}
