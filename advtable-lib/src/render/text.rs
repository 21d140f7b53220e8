//! Fixed-width text renderer.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::model::FieldPath;
use crate::model::Row;
use crate::sort::Direction;
use crate::table::{AdvancedTable, Alignment, Column, HeaderCell};

/// Header indicator for ascending sort.
pub const ASC_INDICATOR: &str = "▲";
/// Header indicator for descending sort.
pub const DESC_INDICATOR: &str = "▼";

const SEPARATOR: &str = " ";
const ELLIPSIS: char = '…';

/// Render `table` as fixed-width text.
///
/// The output is a header line, a rule, then one line per body row in display
/// order. `build_row` returns one cell string per column; missing cells render
/// empty and extra cells are ignored.
pub fn render_text<R, F>(table: &AdvancedTable<R>, build_row: F) -> String
where
    R: Row,
    F: Fn(&R) -> Vec<String>,
{
    let columns = table.columns();
    let mut lines = Vec::new();

    let header: Vec<String> = table.header().iter().map(header_text).collect();
    lines.push(join_line(columns, &header));

    let rule: Vec<String> = columns.iter().map(|c| "─".repeat(c.width as usize)).collect();
    lines.push(rule.join(SEPARATOR));

    for body_row in table.body() {
        let cells = build_row(body_row.row);
        lines.push(join_line(columns, &cells));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Cells read from each column's sort key; unsortable columns render empty.
pub fn default_cells<R: Row>(row: &R, columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            column
                .sort_key
                .as_deref()
                .and_then(|key| row.field(&FieldPath::new(key)))
                .map(|value| value.to_text())
                .unwrap_or_default()
        })
        .collect()
}

/// Pad or truncate `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate(text, width);
    let pad = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

// Indicator placement depends on alignment to avoid shifting text.
fn header_text(cell: &HeaderCell<'_>) -> String {
    let column = cell.column;
    let Some(direction) = cell.direction else {
        return column.label.clone();
    };
    let indicator = match direction {
        Direction::Asc => ASC_INDICATOR,
        Direction::Desc => DESC_INDICATOR,
    };
    match column.align {
        Alignment::Left => format!("{} {}", column.label, indicator),
        Alignment::Right => format!("{} {}", indicator, column.label),
        Alignment::Center => {
            let label_width = column.label.width();
            let col_width = column.width as usize;
            let left_padding = col_width.saturating_sub(label_width) / 2;
            let right_padding = col_width
                .saturating_sub(label_width)
                .saturating_sub(left_padding);
            if left_padding >= right_padding {
                format!("{} {}", indicator, column.label)
            } else {
                format!("{} {}", column.label, indicator)
            }
        }
    }
}

fn join_line(columns: &[Column], cells: &[String]) -> String {
    let line: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            fit(cell, column.width as usize, column.align)
        })
        .collect();
    line.join(SEPARATOR).trim_end().to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
