//! Tests for report sort order

use std::cmp::Ordering;

use taskreport::core::models::{Cell, Direction, SortFamily};
use taskreport::core::services::sort::compare;
use taskreport::output::ReportResult;

use crate::common::{DAY, NOW, run, settings, tasks};

fn ids(report: &str, pairs: &[(&str, &str)]) -> Vec<String> {
    let output = run(&settings(pairs), report, &[], tasks());
    let result = ReportResult::from_output(report, &output);
    let id = output.table.column_index("id").unwrap();
    result.rows.into_iter().map(|mut r| r.swap_remove(id)).collect()
}

// =============================================================================
// BUILT-IN REPORTS
// =============================================================================

#[test]
fn test_list_sorts_by_due_then_priority() {
    assert_eq!(ids("list", &[]), ["1", "3", "2", "4"]);
}

#[test]
fn test_ls_sorts_by_priority() {
    assert_eq!(ids("ls", &[]), ["1", "3", "2", "4"]);
}

#[test]
fn test_minimal_sorts_by_project_lexically() {
    // "" < "Garden" < "Home" < "Home.Admin"
    assert_eq!(ids("minimal", &[]), ["4", "2", "1", "3"]);
}

#[test]
fn test_newest_and_oldest() {
    assert_eq!(ids("newest", &[]), ["4", "3", "2", "1"]);
    assert_eq!(ids("oldest", &[]), ["1", "2", "3", "4"]);
}

// =============================================================================
// MULTI-KEY ORDER
// =============================================================================

#[test]
fn test_secondary_key_breaks_ties() {
    let pairs = [
        ("report.p.columns", "project,id"),
        ("report.p.sort", "project+,id-"),
        ("report.p.filter", "project:Home"),
    ];
    // The completed task (shown as "-") ties with id 1 on project
    assert_eq!(ids("p", &pairs), ["1", "-", "3"]);
}

#[test]
fn test_sort_key_order_sets_precedence() {
    let by_priority = [
        ("report.s.columns", "id,priority,entry"),
        ("report.s.sort", "priority-,entry+"),
        ("report.s.filter", "status:pending"),
    ];
    assert_eq!(ids("s", &by_priority), ["1", "3", "2", "4"]);

    let by_entry = [
        ("report.s.columns", "id,priority,entry"),
        ("report.s.sort", "entry+,priority-"),
        ("report.s.filter", "status:pending"),
    ];
    // Task 4 has no entry date and sorts first
    assert_eq!(ids("s", &by_entry), ["4", "3", "1", "2"]);
}

#[test]
fn test_no_sort_keeps_load_order() {
    let pairs = [("report.u.columns", "id,description"), ("report.u.filter", "status:pending")];
    assert_eq!(ids("u", &pairs), ["1", "2", "3", "4"]);
}

// =============================================================================
// COMPARATORS
// =============================================================================

#[test]
fn test_character_compares_display_text() {
    let a = Cell::formatted("apple", "zzz");
    let b = Cell::formatted("banana", "aaa");
    assert_eq!(compare(SortFamily::Character, Direction::Ascending, &a, &b), Ordering::Less);
}

#[test]
fn test_date_compares_raw_timestamps() {
    let early = Cell::formatted("12/31/2023", (NOW - DAY).to_string());
    let late = Cell::formatted("01/01/2023", NOW.to_string());
    assert_eq!(compare(SortFamily::Date, Direction::Ascending, &early, &late), Ordering::Less);
    assert_eq!(compare(SortFamily::Date, Direction::Descending, &early, &late), Ordering::Greater);
    assert_eq!(compare(SortFamily::Date, Direction::Ascending, &late, &late), Ordering::Equal);
}

#[test]
fn test_due_missing_is_greater_either_way() {
    let dated = Cell::formatted("x", NOW.to_string());
    let missing = Cell::empty();
    for direction in [Direction::Ascending, Direction::Descending] {
        assert_eq!(compare(SortFamily::DueDate, direction, &missing, &dated), Ordering::Greater);
        assert_eq!(compare(SortFamily::DueDate, direction, &dated, &missing), Ordering::Less);
        assert_eq!(compare(SortFamily::DueDate, direction, &missing, &missing), Ordering::Equal);
    }
}

#[test]
fn test_numeric_ignores_padding() {
    let a = Cell::formatted(" 9", " 9");
    let b = Cell::text("10");
    assert_eq!(compare(SortFamily::Numeric, Direction::Ascending, &a, &b), Ordering::Less);
}

#[test]
fn test_period_compares_length() {
    let weekly = Cell::text("weekly");
    let days = Cell::text("10d");
    assert_eq!(compare(SortFamily::Period, Direction::Ascending, &weekly, &days), Ordering::Less);
    assert_eq!(compare(SortFamily::Period, Direction::Descending, &weekly, &days), Ordering::Greater);
}
