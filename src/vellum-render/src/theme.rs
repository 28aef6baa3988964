//! Theme system for markdown rendering.
//!
//! Maps each semantic role (heading levels, code, links, table parts, ...)
//! to a [`ContentStyle`] descriptor. The registry is read-only at render
//! time: the default instance is built once per process and shared behind an
//! `Arc`, and custom themes are constructed up front with the builder
//! methods, never mutated afterwards.
//!
//! # Example
//!
//! ```rust,ignore
//! use vellum_render::MarkdownTheme;
//!
//! // Shared process-wide default
//! let theme = MarkdownTheme::global();
//!
//! // Or customize with the builder pattern
//! let custom = MarkdownTheme::default()
//!     .with_h1(bold_style)
//!     .with_link(underlined_style);
//! ```

use std::sync::Arc;

use crossterm::style::{Attribute, Color, ContentStyle};
use once_cell::sync::Lazy;

static DEFAULT_THEME: Lazy<Arc<MarkdownTheme>> = Lazy::new(|| Arc::new(MarkdownTheme::default()));

/// Style registry for markdown rendering.
///
/// One [`ContentStyle`] per semantic role. Layout metrics (heading margins,
/// code box padding, blockquote border overhead) are fixed constants owned
/// by the renderer, not part of the registry.
#[derive(Debug, Clone)]
pub struct MarkdownTheme {
    // ============================================================
    // Headings (H1-H4; deeper levels collapse to H4)
    // ============================================================
    /// Style for H1 headings, rendered as a padded badge.
    pub h1: Style,
    /// Style for H2 headings.
    pub h2: Style,
    /// Style for H3 headings.
    pub h3: Style,
    /// Style for H4 and deeper headings.
    pub h4: Style,

    // ============================================================
    // Text roles
    // ============================================================
    /// Style for paragraph text.
    pub paragraph: Style,
    /// Style for italic emphasis.
    pub emphasis: Style,
    /// Style for bold emphasis.
    pub strong: Style,
    /// Style for strikethrough text.
    pub strikethrough: Style,
    /// Style for inline code spans.
    pub code_inline: Style,

    // ============================================================
    // Blocks
    // ============================================================
    /// Style for code block content (box background and text).
    pub code_block: Style,
    /// Style for the blockquote left border.
    pub blockquote_border: Style,
    /// Style for link text and URL.
    pub link: Style,
    /// Style for thematic break rules.
    pub thematic_break: Style,

    // ============================================================
    // Tables
    // ============================================================
    /// Style for table header cells.
    pub table_header: Style,
    /// Style for table body cells.
    pub table_cell: Style,
    /// Style for table border glyphs.
    pub table_border: Style,
}

/// Alias used throughout the crate for a role's visual descriptor.
pub type Style = ContentStyle;

impl MarkdownTheme {
    /// Returns the shared process-wide default theme.
    ///
    /// Built on first use and never mutated afterwards, so it is safe to
    /// read from concurrent render calls.
    #[must_use]
    pub fn global() -> Arc<Self> {
        DEFAULT_THEME.clone()
    }

    /// Looks up the heading style for a level; levels of 4 and deeper share
    /// the H4 style.
    #[must_use]
    pub fn heading_style(&self, level: u8) -> Style {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            _ => self.h4,
        }
    }

    /// Sets the H1 heading style.
    #[must_use]
    pub fn with_h1(mut self, style: Style) -> Self {
        self.h1 = style;
        self
    }

    /// Sets the H2 heading style.
    #[must_use]
    pub fn with_h2(mut self, style: Style) -> Self {
        self.h2 = style;
        self
    }

    /// Sets the H3 heading style.
    #[must_use]
    pub fn with_h3(mut self, style: Style) -> Self {
        self.h3 = style;
        self
    }

    /// Sets the H4 heading style.
    #[must_use]
    pub fn with_h4(mut self, style: Style) -> Self {
        self.h4 = style;
        self
    }

    /// Sets the inline code style.
    #[must_use]
    pub fn with_code_inline(mut self, style: Style) -> Self {
        self.code_inline = style;
        self
    }

    /// Sets the code block style.
    #[must_use]
    pub fn with_code_block(mut self, style: Style) -> Self {
        self.code_block = style;
        self
    }

    /// Sets the link style.
    #[must_use]
    pub fn with_link(mut self, style: Style) -> Self {
        self.link = style;
        self
    }

    /// Sets the table header style.
    #[must_use]
    pub fn with_table_header(mut self, style: Style) -> Self {
        self.table_header = style;
        self
    }
}

/// Builds a [`ContentStyle`] from optional colors and a set of attributes.
fn style(fg: Option<Color>, bg: Option<Color>, attrs: &[Attribute]) -> Style {
    let mut style = ContentStyle {
        foreground_color: fg,
        background_color: bg,
        ..ContentStyle::default()
    };
    for &attr in attrs {
        style.attributes.set(attr);
    }
    style
}

impl Default for MarkdownTheme {
    fn default() -> Self {
        use Attribute::{Bold, CrossedOut, Italic, Underlined};
        use Color::AnsiValue;

        Self {
            h1: style(Some(AnsiValue(230)), Some(AnsiValue(63)), &[Bold]),
            h2: style(Some(AnsiValue(170)), None, &[Bold]),
            h3: style(Some(AnsiValue(141)), None, &[Bold]),
            h4: style(Some(AnsiValue(105)), None, &[Bold]),

            paragraph: style(None, None, &[]),
            emphasis: style(None, None, &[Italic]),
            strong: style(None, None, &[Bold]),
            strikethrough: style(Some(AnsiValue(245)), None, &[CrossedOut]),
            code_inline: style(Some(AnsiValue(213)), Some(AnsiValue(236)), &[]),

            code_block: style(Some(AnsiValue(252)), Some(AnsiValue(236)), &[]),
            blockquote_border: style(Some(AnsiValue(240)), None, &[]),
            link: style(Some(AnsiValue(87)), None, &[Underlined]),
            thematic_break: style(Some(AnsiValue(240)), None, &[]),

            table_header: style(Some(AnsiValue(170)), None, &[Bold]),
            table_cell: style(Some(AnsiValue(252)), None, &[]),
            table_border: style(Some(AnsiValue(240)), None, &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_heading_colors() {
        let theme = MarkdownTheme::default();
        assert!(theme.h1.foreground_color.is_some());
        assert!(theme.h1.background_color.is_some());
        assert!(theme.h2.foreground_color.is_some());
    }

    #[test]
    fn test_heading_style_collapses_deep_levels() {
        let theme = MarkdownTheme::default();
        assert_eq!(theme.heading_style(4), theme.h4);
        assert_eq!(theme.heading_style(6), theme.h4);
    }

    #[test]
    fn test_builder_overrides_role() {
        let custom = style(Some(Color::AnsiValue(1)), None, &[Attribute::Bold]);
        let theme = MarkdownTheme::default().with_h1(custom);
        assert_eq!(theme.h1, custom);
    }

    #[test]
    fn test_global_returns_shared_instance() {
        let a = MarkdownTheme::global();
        let b = MarkdownTheme::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
