//! Tests for the text table renderer
//!
//! Tests that force ANSI output share the global `colored` override and are
//! serialized.

use serial_test::serial;
use taskreport::adapters::TextTableRenderer;
use taskreport::core::models::{Cell, Column, Justify, Table, WidthPolicy};
use taskreport::core::ports::TableRenderer;

use crate::common::{run, settings, tasks};

const UNDERLINE: &str = "\x1b[4m";
const ON_BLUE: &str = "\x1b[44m";
const RED: &str = "\x1b[31m";

fn column(name: &str, justify: Justify, width: WidthPolicy) -> Column {
    Column {
        name: name.to_string(),
        label: name.to_string(),
        justify,
        width,
        underline: false,
    }
}

fn two_rows() -> Table {
    let mut table = Table::with_rows(2);
    table.add_column(
        column("id", Justify::Right, WidthPolicy::Minimum),
        vec![Cell::text("1"), Cell::text("2")],
    );
    table.add_column(
        column("description", Justify::Left, WidthPolicy::Flexible),
        vec![Cell::text("first"), Cell::text("second")],
    );
    table
}

/// Render with ANSI codes forced on
fn forced(table: &Table) -> String {
    colored::control::set_override(true);
    let text = TextTableRenderer::new(80).render(table, 0);
    colored::control::unset_override();
    text
}

// =============================================================================
// HEADERS
// =============================================================================

#[test]
#[serial]
fn test_solid_underline_header() {
    let mut table = two_rows();
    table.set_column_underline(0);
    table.set_column_underline(1);
    let text = forced(&table);
    let header = text.lines().next().unwrap();
    assert_eq!(header.matches(UNDERLINE).count(), 2);
    assert!(!text.contains("--"));
}

#[test]
#[serial]
fn test_dashed_rule_has_no_escapes() {
    let mut table = two_rows();
    table.set_dashed_underline();
    let text = forced(&table);
    assert!(!text.contains('\x1b'));
    assert_eq!(text.lines().nth(1), Some("-- -----------"));
}

// =============================================================================
// ROW AND CELL COLORS
// =============================================================================

#[test]
#[serial]
fn test_alternate_color_on_odd_rows() {
    let mut table = two_rows();
    table.set_alternate_color("on blue".parse().unwrap());
    let text = forced(&table);
    let lines: Vec<&str> = text.lines().collect();
    assert!(!lines[1].contains(ON_BLUE));
    assert!(lines[2].contains(ON_BLUE));
}

#[test]
#[serial]
fn test_cell_color_overrides_row_color() {
    let mut table = two_rows();
    table.set_row_color(0, "on blue".parse().unwrap());
    table.set_cell_color(0, 1, "red".parse().unwrap());
    let text = forced(&table);
    let row = text.lines().nth(1).unwrap();
    assert!(row.contains(ON_BLUE));
    assert!(row.contains(RED));
    assert!(!text.lines().nth(2).unwrap().contains('\x1b'));
}

#[test]
#[serial]
fn test_colors_suppressed_without_override() {
    colored::control::set_override(false);
    let mut table = two_rows();
    table.set_row_color(0, "bold red".parse().unwrap());
    table.set_column_underline(0);
    let text = TextTableRenderer::new(80).render(&table, 0);
    colored::control::unset_override();
    assert!(!text.contains('\x1b'));
}

#[test]
#[serial]
fn test_colored_report_end_to_end() {
    colored::control::set_override(true);
    let output = run(&settings(&[("color", "on")]), "list", &[], tasks());
    colored::control::unset_override();
    assert!(output.text.contains(UNDERLINE));
    // Pay rent is overdue; bold and red share one escape sequence
    assert!(output.text.contains(";31m"));
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn test_wrapped_row_keeps_columns_aligned() {
    let mut table = Table::with_rows(1);
    table.add_column(column("id", Justify::Right, WidthPolicy::Minimum), vec![Cell::text("12")]);
    table.add_column(
        column("description", Justify::Left, WidthPolicy::Flexible),
        vec![Cell::text("a description long enough to wrap twice over")],
    );
    let text = TextTableRenderer::new(20).render(&table, 0);
    let lines: Vec<&str> = text.lines().skip(1).collect();
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("12 a"));
    assert!(lines[1..].iter().all(|line| line.starts_with("   ")));
}

#[test]
fn test_multiline_cell_spans_lines() {
    let mut table = Table::with_rows(1);
    table.add_column(column("id", Justify::Right, WidthPolicy::Minimum), vec![Cell::text("1")]);
    table.add_column(
        column("description", Justify::Left, WidthPolicy::Flexible),
        vec![Cell::text("Pay rent\n11/14/2023 call landlord")],
    );
    let text = TextTableRenderer::new(80).render(&table, 0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], " 1 Pay rent");
    assert_eq!(lines[2], "   11/14/2023 call landlord");
}

#[test]
fn test_empty_table_renders_header_only() {
    let table = Table::with_rows(0);
    let text = TextTableRenderer::new(80).render(&table, 0);
    assert_eq!(text, "\n");
}
