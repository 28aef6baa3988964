//! Inline rendering.
//!
//! Converts a sequence of inline nodes into one concatenated styled run.
//! No wrapping happens here: the block renderer wraps after assembly, since
//! wrapping must measure the visual width of the styled result.

use crate::theme::{MarkdownTheme, Style};
use crate::tree::Inline;

/// Maximum inline nesting depth; deeper content is truncated.
const MAX_INLINE_DEPTH: usize = 100;

/// Renders inline nodes to one styled, unwrapped string.
#[must_use]
pub fn render_inlines(inlines: &[Inline], theme: &MarkdownTheme) -> String {
    let mut out = String::new();
    for node in inlines {
        render_inline(&mut out, node, theme, 0);
    }
    out
}

fn render_inline(out: &mut String, node: &Inline, theme: &MarkdownTheme, depth: usize) {
    if depth > MAX_INLINE_DEPTH {
        tracing::warn!(depth, "inline nesting too deep, truncating");
        return;
    }
    match node {
        Inline::Text(text) => out.push_str(text),
        Inline::SoftBreak => out.push(' '),
        Inline::HardBreak => out.push('\n'),
        Inline::Code(code) => out.push_str(&theme.code_inline.apply(code).to_string()),
        Inline::Emphasis(children) => styled_run(out, children, theme.emphasis, theme, depth),
        Inline::Strong(children) => styled_run(out, children, theme.strong, theme, depth),
        Inline::Strikethrough(children) => {
            styled_run(out, children, theme.strikethrough, theme, depth);
        }
        Inline::Link { children, url } => {
            // Text and URL form one styled run: "text (url)".
            let text = collect(children, theme, depth);
            out.push_str(&theme.link.apply(format!("{text} ({url})")).to_string());
        }
        Inline::AutoLink(url) => out.push_str(&theme.link.apply(url).to_string()),
        Inline::Image(alt) => {
            let alt = collect(alt, theme, depth);
            out.push_str("[image: ");
            out.push_str(&alt);
            out.push(']');
        }
        Inline::TaskMarker(checked) => out.push_str(if *checked { "☑ " } else { "☐ " }),
        Inline::Html(html) => out.push_str(html),
        Inline::Other(children) => {
            for child in children {
                render_inline(out, child, theme, depth + 1);
            }
        }
    }
}

/// Renders `children` and applies `style` to the combined run.
fn styled_run(
    out: &mut String,
    children: &[Inline],
    style: Style,
    theme: &MarkdownTheme,
    depth: usize,
) {
    let content = collect(children, theme, depth);
    out.push_str(&style.apply(content).to_string());
}

fn collect(children: &[Inline], theme: &MarkdownTheme, depth: usize) -> String {
    let mut buf = String::new();
    for child in children {
        render_inline(&mut buf, child, theme, depth + 1);
    }
    buf
}
