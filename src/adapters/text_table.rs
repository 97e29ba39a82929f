//! Plain-text table renderer
//!
//! Lays the abstract table out in columns separated by one space. Minimum-width
//! columns take their widest cell; flexible columns share what is left of the
//! output width and word-wrap. Header labels get either a solid underline or
//! a dashed rule beneath them.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::core::models::{Cell, Color, Column, Justify, Table, WidthPolicy};
use crate::core::ports::TableRenderer;
use crate::core::services::ordered_rows;

/// Narrowest a flexible column is squeezed to
const MIN_FLEXIBLE_WIDTH: usize = 15;

/// Renders tables as aligned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTableRenderer {
    width: usize,
}

impl TextTableRenderer {
    /// A renderer for a fixed output width
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// A renderer sized to the terminal, or `default_width` when there is none
    #[must_use]
    pub fn for_terminal(default_width: usize) -> Self {
        let width = terminal_size::terminal_size()
            .map_or(default_width, |(terminal_size::Width(w), _)| usize::from(w));
        log::debug!("rendering at width {width}");
        Self::new(width)
    }

    /// Output width
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    fn column_widths(&self, table: &Table, rows: &[usize]) -> Vec<usize> {
        let mut widths: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                rows.iter()
                    .filter_map(|&row| table.cell(row, index))
                    .flat_map(|cell| cell.text.lines())
                    .map(UnicodeWidthStr::width)
                    .chain(std::iter::once(column.label.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separators = widths.len().saturating_sub(1);
        let total: usize = widths.iter().sum::<usize>() + separators;
        if total <= self.width {
            return widths;
        }

        let flexible: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.width == WidthPolicy::Flexible)
            .map(|(index, _)| index)
            .collect();
        if flexible.is_empty() {
            return widths;
        }

        let fixed: usize = widths
            .iter()
            .enumerate()
            .filter(|(index, _)| !flexible.contains(index))
            .map(|(_, w)| w)
            .sum();
        let available = self.width.saturating_sub(fixed + separators);
        let share = (available / flexible.len()).max(MIN_FLEXIBLE_WIDTH);
        for index in flexible {
            widths[index] = widths[index].min(share);
        }
        widths
    }
}

fn pad(text: &str, width: usize, justify: Justify) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match justify {
        Justify::Left => format!("{text}{fill}"),
        Justify::Right => format!("{fill}{text}"),
    }
}

/// Word-wrap text to a display width, splitting words that do not fit
fn wrap(text: &str, width: usize) -> Vec<String> {
    let options =
        textwrap::Options::new(width.max(1)).wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options).into_iter().map(Cow::into_owned).collect()
}

fn paint(text: String, color: Option<&Color>) -> String {
    match color {
        Some(color) if color.nontrivial() => color.paint(&text).to_string(),
        _ => text,
    }
}

fn header(columns: &[Column], widths: &[usize], dashed: bool) -> String {
    let labels: Vec<String> = columns
        .iter()
        .zip(widths)
        .map(|(column, &width)| {
            let underline = column.underline.then(Color::underlined);
            let label = pad(&column.label, width, column.justify);
            paint(label, underline.as_ref())
        })
        .collect();

    let mut out = labels.join(" ").trim_end().to_string();
    out.push('\n');
    if dashed {
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');
    }
    out
}

fn row_color(table: &Table, row: usize, position: usize) -> Option<Color> {
    let own = table.rows().get(row).and_then(|r| r.color);
    match (table.alternate_color(), position % 2 == 1) {
        (Some(alternate), true) => Some(own.map_or(*alternate, |c| alternate.blended(&c))),
        _ => own,
    }
}

impl TableRenderer for TextTableRenderer {
    fn render(&self, table: &Table, limit: usize) -> String {
        let mut rows = ordered_rows(table);
        if limit > 0 {
            rows.truncate(limit);
        }

        let widths = self.column_widths(table, &rows);
        let columns = table.columns();
        let mut out = header(columns, &widths, table.dashed_underline());

        let empty = Cell::empty();
        for (position, &row) in rows.iter().enumerate() {
            let base = row_color(table, row, position);
            let wrapped: Vec<Vec<String>> = (0..columns.len())
                .map(|index| wrap(&table.cell(row, index).unwrap_or(&empty).text, widths[index]))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let fragments: Vec<String> = columns
                    .iter()
                    .enumerate()
                    .map(|(index, column)| {
                        let text = wrapped[index].get(line).map_or("", String::as_str);
                        let padded = pad(text, widths[index], column.justify);
                        let cell_color = table.cell(row, index).and_then(|c| c.color);
                        paint(padded, cell_color.or(base).as_ref())
                    })
                    .collect();
                let joined = fragments.join(" ");
                if base.is_some() {
                    out.push_str(&joined);
                } else {
                    out.push_str(joined.trim_end());
                }
                out.push('\n');
            }
        }
        out
    }
}
