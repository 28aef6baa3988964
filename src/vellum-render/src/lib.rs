//! # Vellum Render
//!
//! Markdown-to-terminal rendering for Vellum with:
//! - Full CommonMark plus GFM support via pulldown-cmark
//! - Styled output as plain text with embedded escape sequences
//! - Bordered, aligned GFM tables
//! - Width-aware wrapping that measures visual columns, not bytes
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      MarkdownRenderer                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐   │
//! │  │    Theme     │  │   Renderer   │  │   Document Tree   │   │
//! │  └──────┬───────┘  └──────┬───────┘  └─────────┬─────────┘   │
//! └─────────┼─────────────────┼────────────────────┼─────────────┘
//!           │                 │                    │
//!     ┌─────┴─────┐     ┌─────┴─────┐        ┌─────┴─────┐
//!     │           │     │           │        │           │
//!     ▼           ▼     ▼           ▼        ▼           ▼
//! ┌───────┐ ┌───────┐ ┌───────┐ ┌────────┐ ┌───────┐ ┌───────┐
//! │ Table │ │ Code  │ │ List  │ │ Inline │ │Block- │ │ Front │
//! │       │ │ Block │ │       │ │        │ │ quote │ │matter │
//! └───────┘ └───────┘ └───────┘ └────────┘ └───────┘ └───────┘
//! ```
//!
//! Rendering is a pure function of source bytes and width: no state survives
//! a call, and no input produces an error. Malformed front matter, unknown
//! node kinds and empty documents all degrade gracefully.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vellum_render::{MarkdownRenderer, render_markdown};
//!
//! // One-shot rendering with defaults
//! let text = render_markdown("# Hello **World**", 80);
//!
//! // Or configure a reusable renderer
//! let renderer = MarkdownRenderer::new().with_width(100);
//! let text = renderer.render("# Hello");
//! ```

// Sub-modules
pub mod frontmatter;
pub mod inline;
mod list;
pub mod renderer;
pub mod table;
pub mod theme;
pub mod tree;
pub mod width;

// Re-exports for convenient access
pub use frontmatter::strip_front_matter;
pub use inline::render_inlines;
pub use renderer::MarkdownRenderer;
pub use table::{Alignment, TableCell};
pub use theme::MarkdownTheme;
pub use tree::{Block, Inline, List, ListItem, Table, TableRow, parse_document};
pub use width::{strip_ansi, visual_width};

/// Convenience function to render markdown with the default theme.
///
/// # Arguments
/// * `source` - The markdown source text
/// * `width` - Maximum content width in columns (1 or more)
///
/// # Returns
/// Styled text ready for display in a fixed-width viewport.
#[must_use]
pub fn render_markdown(source: &str, width: u16) -> String {
    MarkdownRenderer::new().with_width(width).render(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple() {
        let text = render_markdown("Hello **world**", 80);
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
    }

    #[test]
    fn test_default_theme_accessible() {
        let theme = MarkdownTheme::global();
        assert!(theme.h1.foreground_color.is_some());
    }
}
