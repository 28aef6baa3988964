//! Table rendering.
//!
//! Lays out a GFM table as bordered, aligned, styled rows. Column widths are
//! the maximum visual width of any cell in the column; ragged rows are
//! tolerated and missing trailing cells render as empty.

use super::border;
use super::types::{Alignment, CELL_PADDING, TableCell};
use super::utils::align_text;
use crate::inline::render_inlines;
use crate::theme::MarkdownTheme;
use crate::tree::Table;

/// Renders a table to styled text, one line per row plus a separator line
/// directly below the header row. The output ends with a blank line; a
/// table with no rows renders nothing at all.
pub(crate) fn render_table(table: &Table, theme: &MarkdownTheme) -> String {
    if table.rows.is_empty() {
        return String::new();
    }

    // Inline-render every cell first; layout measures the styled runs.
    let rows: Vec<(bool, Vec<TableCell>)> = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| TableCell::new(render_inlines(cell, theme)))
                .collect();
            (row.header, cells)
        })
        .collect();

    let num_cols = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    if num_cols == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; num_cols];
    for (_, cells) in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let separator = separator_line(&widths);
    let empty = TableCell::default();

    let mut out = String::new();
    for (header, cells) in &rows {
        let cell_style = if *header {
            theme.table_header
        } else {
            theme.table_cell
        };
        out.push_str(&theme.table_border.apply(border::VERTICAL).to_string());
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).unwrap_or(&empty);
            let alignment = table.alignments.get(i).copied().unwrap_or_default();
            let padded = format!(" {} ", align_text(&cell.content, *width, alignment));
            out.push_str(&cell_style.apply(padded).to_string());
            out.push_str(&theme.table_border.apply(border::VERTICAL).to_string());
        }
        out.push('\n');
        if *header {
            out.push_str(&theme.table_border.apply(&separator).to_string());
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// Builds the `├──┼──┤` separator sized to the column widths plus padding.
fn separator_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| {
            std::iter::repeat(border::HORIZONTAL)
                .take(width + 2 * CELL_PADDING)
                .collect()
        })
        .collect();
    format!(
        "{}{}{}",
        border::T_RIGHT,
        segments.join(&border::CROSS.to_string()),
        border::T_LEFT
    )
}
