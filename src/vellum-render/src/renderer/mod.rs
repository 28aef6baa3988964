//! Block renderer: the main entry point for markdown rendering.
//!
//! [`MarkdownRenderer`] turns markdown source into a single string of styled
//! text: front matter is stripped, the source is parsed into a document
//! tree, and a depth-first walk dispatches every block kind to its layout
//! logic. The walk is synchronous and pure: same source and width always
//! produce byte-identical output, and no input makes it fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use vellum_render::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new().with_width(80);
//! let text = renderer.render("# Hello **World**");
//! ```


use std::sync::Arc;

use crate::frontmatter::strip_front_matter;
use crate::inline::render_inlines;
use crate::list::render_list_item;
use crate::table::render_table;
use crate::theme::MarkdownTheme;
use crate::tree::{Block, Inline, parse_document};
use crate::width::{visual_width, wrap_styled};

// ============================================================
// LAYOUT CONSTANTS
// ============================================================

/// Blocks nested deeper than this are skipped; the output truncates instead
/// of risking stack exhaustion on pathological input.
const MAX_RENDER_DEPTH: usize = 100;

/// Left border plus padding overhead inside a blockquote.
const QUOTE_OVERHEAD: usize = 3;

/// Blockquote left border glyph.
const QUOTE_BORDER: char = '\u{2503}';

/// Horizontal padding inside a code box, per side.
const CODE_PADDING: usize = 2;

/// Column span of a thematic break rule.
const RULE_WIDTH: usize = 40;

// ============================================================
// MARKDOWN RENDERER
// ============================================================

/// Main markdown renderer.
///
/// Holds the style registry and the maximum content width. Cheap to clone;
/// the theme is shared behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Style registry consulted by every layout step.
    theme: Arc<MarkdownTheme>,
    /// Maximum content width in columns. Callers keep this at 1 or more.
    width: u16,
}

impl MarkdownRenderer {
    /// Creates a renderer with the shared default theme and 80 columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: MarkdownTheme::global(),
            width: 80,
        }
    }

    /// Creates a renderer with a custom theme.
    #[must_use]
    pub fn with_theme(theme: MarkdownTheme) -> Self {
        Self {
            theme: Arc::new(theme),
            width: 80,
        }
    }

    /// Sets the rendering width.
    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Returns the theme.
    pub fn theme(&self) -> &MarkdownTheme {
        &self.theme
    }

    /// Returns the width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Renders markdown source to styled text.
    ///
    /// Front matter is stripped, the tree is walked top-down, and trailing
    /// newlines are trimmed from the assembled result. Empty or
    /// whitespace-only input produces an empty string.
    pub fn render(&self, source: &str) -> String {
        let source = strip_front_matter(source);
        let document = parse_document(&source);
        tracing::trace!(width = self.width, bytes = source.len(), "rendering document");

        let mut out = String::new();
        let ctx = RenderCtx {
            width: usize::from(self.width),
            depth: 0,
            theme: &self.theme,
        };
        render_block(&mut out, &document, ctx);
        out.trim_end_matches('\n').to_string()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// RENDER CONTEXT
// ============================================================

/// Context carried down the recursion by value.
///
/// Immutable within one call; siblings never observe each other's changes.
/// The width only narrows (blockquote interiors), the depth only grows.
#[derive(Clone, Copy)]
pub(crate) struct RenderCtx<'a> {
    /// Maximum content width in columns.
    pub(crate) width: usize,
    /// Current nesting depth, used for indentation and the depth guard.
    pub(crate) depth: usize,
    /// Style registry.
    pub(crate) theme: &'a MarkdownTheme,
}

impl<'a> RenderCtx<'a> {
    /// Context for nested content, one level deeper.
    pub(crate) fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Context narrowed by a fixed overhead, one level deeper.
    fn narrowed_child(self, overhead: usize) -> Self {
        Self {
            width: self.width.saturating_sub(overhead).max(1),
            depth: self.depth + 1,
            ..self
        }
    }
}

// ============================================================
// BLOCK DISPATCH
// ============================================================

/// Renders one block node into `out`.
pub(crate) fn render_block(out: &mut String, block: &Block, ctx: RenderCtx<'_>) {
    if ctx.depth > MAX_RENDER_DEPTH {
        tracing::warn!(depth = ctx.depth, "block nesting too deep, truncating output");
        return;
    }
    match block {
        // Unknown kinds recurse with no extra decoration.
        Block::Document(children) | Block::Container(children) => {
            render_children(out, children, ctx);
        }
        Block::Heading { level, content } => render_heading(out, *level, content, ctx),
        Block::Paragraph(content) => {
            let text = render_inlines(content, ctx.theme);
            let styled = ctx.theme.paragraph.apply(text).to_string();
            out.push_str(&wrap_styled(&styled, ctx.width));
            out.push_str("\n\n");
        }
        Block::CodeBlock { language: _, text } => render_code_block(out, text, ctx),
        Block::Blockquote(children) => render_blockquote(out, children, ctx),
        Block::List(list) => {
            for (position, item) in list.items.iter().enumerate() {
                render_list_item(out, item, position, list, ctx);
            }
            out.push('\n');
        }
        Block::Table(table) => out.push_str(&render_table(table, ctx.theme)),
        Block::ThematicBreak => render_thematic_break(out, ctx),
        Block::TextBlock(content) => out.push_str(&render_inlines(content, ctx.theme)),
    }
}

fn render_children(out: &mut String, children: &[Block], ctx: RenderCtx<'_>) {
    for child in children {
        render_block(out, child, ctx);
    }
}

/// Level 1 renders as a padded badge; levels 2 and 3 get a blank line above
/// unless they open the buffer; levels 4 and deeper share the H4 style.
fn render_heading(out: &mut String, level: u8, content: &[Inline], ctx: RenderCtx<'_>) {
    let text = render_inlines(content, ctx.theme);
    let styled = if level == 1 {
        ctx.theme.h1.apply(format!(" {text} ")).to_string()
    } else {
        if matches!(level, 2 | 3) && !out.is_empty() {
            out.push('\n');
        }
        ctx.theme.heading_style(level).apply(text).to_string()
    };
    out.push_str(&wrap_styled(&styled, ctx.width));
    out.push_str("\n\n");
}

/// Code renders verbatim inside a fixed-padding box: one blank padded line
/// above and below, two columns of padding per side, no inline parsing and
/// no highlighting of the language tag.
fn render_code_block(out: &mut String, text: &str, ctx: RenderCtx<'_>) {
    let inner_width = ctx.width.saturating_sub(2 * CODE_PADDING).max(1);
    let text = text.strip_suffix('\n').unwrap_or(text);

    let mut lines = vec![String::new()];
    for raw in text.split('\n') {
        for piece in wrap_styled(raw, inner_width).split('\n') {
            lines.push(piece.to_string());
        }
    }
    lines.push(String::new());

    for line in &lines {
        let pad = inner_width.saturating_sub(visual_width(line));
        let padded = format!("  {}{}  ", line, " ".repeat(pad));
        out.push_str(&ctx.theme.code_block.apply(padded).to_string());
        out.push('\n');
    }
    out.push('\n');
}

/// Children render into an inner buffer at a narrowed width, then the whole
/// block is decorated with a left border.
fn render_blockquote(out: &mut String, children: &[Block], ctx: RenderCtx<'_>) {
    let mut inner = String::new();
    render_children(&mut inner, children, ctx.narrowed_child(QUOTE_OVERHEAD));
    let inner = inner.trim_end_matches('\n');

    let border = ctx.theme.blockquote_border.apply(QUOTE_BORDER).to_string();
    for line in inner.split('\n') {
        out.push_str(&border);
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

fn render_thematic_break(out: &mut String, ctx: RenderCtx<'_>) {
    if !out.is_empty() {
        out.push('\n');
    }
    let rule: String = std::iter::repeat('\u{2500}')
        .take(RULE_WIDTH.min(ctx.width))
        .collect();
    out.push_str(&ctx.theme.thematic_break.apply(rule).to_string());
    out.push_str("\n\n");
}
