//! Tests for table layout.

use pretty_assertions::assert_eq;

use super::render_table;
use super::types::{Alignment, TableCell};
use super::utils::align_text;
use crate::theme::MarkdownTheme;
use crate::tree::{Inline, Table, TableRow};
use crate::width::strip_ansi;

fn text_cell(text: &str) -> Vec<Inline> {
    vec![Inline::Text(text.to_string())]
}

fn row(header: bool, cells: &[&str]) -> TableRow {
    TableRow {
        header,
        cells: cells.iter().map(|c| text_cell(c)).collect(),
    }
}

fn render_plain(table: &Table) -> String {
    strip_ansi(&render_table(table, &MarkdownTheme::default()))
}

#[test]
fn test_empty_table_renders_nothing() {
    let table = Table {
        rows: Vec::new(),
        alignments: Vec::new(),
    };
    assert_eq!(render_table(&table, &MarkdownTheme::default()), "");
}

#[test]
fn test_single_column_layout() {
    let table = Table {
        rows: vec![row(true, &["Header"]), row(false, &["Value"])],
        alignments: vec![Alignment::None],
    };
    let out = render_plain(&table);
    let lines: Vec<&str> = out.lines().collect();
    // Header row, separator, data row, trailing blank line.
    assert_eq!(lines, vec!["│ Header │", "├────────┤", "│ Value  │", ""]);
}

#[test]
fn test_separator_appears_once_below_header() {
    let table = Table {
        rows: vec![
            row(true, &["A", "B"]),
            row(false, &["1", "2"]),
            row(false, &["3", "4"]),
        ],
        alignments: vec![Alignment::None, Alignment::None],
    };
    let out = render_plain(&table);
    assert_eq!(out.matches('┼').count(), 1);
    assert_eq!(out.lines().nth(1), Some("├───┼───┤"));
}

#[test]
fn test_column_width_is_max_cell_width() {
    let table = Table {
        rows: vec![row(true, &["A"]), row(false, &["longer cell"])],
        alignments: vec![Alignment::None],
    };
    let out = render_plain(&table);
    assert!(out.contains("│ A           │"));
    assert!(out.contains("│ longer cell │"));
}

#[test]
fn test_right_and_center_alignment() {
    let table = Table {
        rows: vec![
            row(true, &["Center", "Right"]),
            row(false, &["ab", "c"]),
        ],
        alignments: vec![Alignment::Center, Alignment::Right],
    };
    let out = render_plain(&table);
    assert!(out.contains("│   ab   │     c │"));
}

#[test]
fn test_alignment_fallback_beyond_declared_vector() {
    // Two columns but only one declared alignment: the extra column
    // defaults to None and pads right like a left-aligned column.
    let table = Table {
        rows: vec![row(true, &["One", "Two"]), row(false, &["a", "b"])],
        alignments: vec![Alignment::Right],
    };
    let out = render_plain(&table);
    assert!(out.contains("│   a │ b   │"));
}

#[test]
fn test_ragged_rows_render_empty_cells() {
    let table = Table {
        rows: vec![row(true, &["A", "B"]), row(false, &["only"])],
        alignments: Vec::new(),
    };
    let out = render_plain(&table);
    assert!(out.contains("│ A    │ B │"));
    assert!(out.contains("│ only │   │"));
}

#[test]
fn test_styled_cells_measure_visual_width() {
    let table = Table {
        rows: vec![
            row(true, &["H"]),
            TableRow {
                header: false,
                cells: vec![vec![Inline::Strong(vec![Inline::Text("bold".into())])]],
            },
        ],
        alignments: Vec::new(),
    };
    let out = render_plain(&table);
    // The bold cell is 4 columns wide, escapes excluded.
    assert!(out.contains("│ bold │"));
}

#[test]
fn test_unicode_cell_width() {
    let table = Table {
        rows: vec![row(true, &["Greeting"]), row(false, &["こんにちは"])],
        alignments: Vec::new(),
    };
    let out = render_plain(&table);
    // CJK content is 10 columns; both rows pad to the same width.
    assert!(out.contains("│ こんにちは │"));
    assert!(out.contains("│ Greeting   │"));
}

#[test]
fn test_align_text() {
    assert_eq!(align_text("Hi", 6, Alignment::Left), "Hi    ");
    assert_eq!(align_text("Hi", 6, Alignment::Right), "    Hi");
    assert_eq!(align_text("Hi", 6, Alignment::Center), "  Hi  ");
    // Odd gap: the extra space goes right.
    assert_eq!(align_text("Hi", 7, Alignment::Center), "  Hi   ");
    assert_eq!(align_text("Hi", 6, Alignment::None), "Hi    ");
    assert_eq!(align_text("wide", 2, Alignment::Left), "wide");
}

#[test]
fn test_table_cell_width_ignores_escapes() {
    let cell = TableCell::new("\u{1b}[1mcode\u{1b}[0m");
    assert_eq!(cell.width(), 4);
}
