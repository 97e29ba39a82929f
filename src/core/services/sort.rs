//! Sort-key mapping and row ordering
//!
//! Each sort token resolves once to a [`SortFamily`]; the comparators below are
//! selected by that tag. Rows are ordered with a stable multi-key sort, the
//! first registered rule being the primary key.

use std::cmp::Ordering;

use crate::core::models::{Cell, Direction, SortFamily, SortKey, SortRule, Table};

use super::dates::period_seconds;

/// Comparison family for a column name
#[must_use]
pub fn family_for(column: &str) -> SortFamily {
    match column {
        "id" => SortFamily::Numeric,
        "priority" => SortFamily::Priority,
        "entry" | "start" | "wait" | "until" | "end" => SortFamily::Date,
        "due" => SortFamily::DueDate,
        "recur" => SortFamily::Period,
        _ => SortFamily::Character,
    }
}

/// Register one sort rule per key, in key order
///
/// Keys naming a column the table does not have are skipped; validation has
/// already rejected them for configured reports.
pub fn register(table: &mut Table, keys: &[SortKey]) {
    for key in keys {
        if let Some(column) = table.column_index(&key.column) {
            table.sort_on(SortRule {
                column,
                family: family_for(&key.column),
                direction: key.direction,
            });
        }
    }
}

fn numeric(cell: &Cell) -> i64 {
    cell.raw.trim().parse().unwrap_or(0)
}

fn timestamp(cell: &Cell) -> Option<i64> {
    cell.raw.trim().parse().ok()
}

fn priority_rank(cell: &Cell) -> u8 {
    match cell.raw.as_str() {
        "H" => 3,
        "M" => 2,
        "L" => 1,
        _ => 0,
    }
}

/// Compare two cells under a family and direction
#[must_use]
pub fn compare(family: SortFamily, direction: Direction, a: &Cell, b: &Cell) -> Ordering {
    match family {
        SortFamily::Numeric => direction.apply(numeric(a).cmp(&numeric(b))),
        SortFamily::Character => direction.apply(a.text.cmp(&b.text)),
        SortFamily::Date => {
            let (a, b) = (timestamp(a).unwrap_or(i64::MIN), timestamp(b).unwrap_or(i64::MIN));
            direction.apply(a.cmp(&b))
        },
        // Tasks without a due date go last in either direction.
        SortFamily::DueDate => match (timestamp(a), timestamp(b)) {
            (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
        },
        SortFamily::Priority => direction.apply(priority_rank(a).cmp(&priority_rank(b))),
        SortFamily::Period => {
            direction.apply(period_seconds(&a.raw).cmp(&period_seconds(&b.raw)))
        },
    }
}

/// Row indices in display order
#[must_use]
pub fn ordered_rows(table: &Table) -> Vec<usize> {
    let empty = Cell::empty();
    let mut order: Vec<usize> = (0..table.row_count()).collect();
    let rules = table.sort_rules();
    if rules.is_empty() {
        return order;
    }

    order.sort_by(|&a, &b| {
        rules
            .iter()
            .map(|rule| {
                compare(
                    rule.family,
                    rule.direction,
                    table.cell(a, rule.column).unwrap_or(&empty),
                    table.cell(b, rule.column).unwrap_or(&empty),
                )
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    order
}
