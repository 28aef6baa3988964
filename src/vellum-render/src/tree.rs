//! Document tree and parser adapter.
//!
//! The renderer walks an immutable tree of block and inline nodes rather
//! than a raw event stream. This module defines the closed node enums and
//! builds the tree from pulldown-cmark events with a container stack.
//!
//! Both enums carry an explicit fallback variant ([`Block::Container`],
//! [`Inline::Other`]) so node kinds added by future parser versions render
//! their children instead of failing.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, LinkType, Options, Parser, Tag};

use crate::table::Alignment;

// ============================================================
// NODE KINDS
// ============================================================

/// A block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Root of the tree.
    Document(Vec<Block>),
    /// Heading with level 1 and up; levels of 4 and deeper share a style.
    Heading { level: u8, content: Vec<Inline> },
    /// Paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// Fenced or indented code block. The text is raw: code content is
    /// never re-parsed for inline markdown, and the language tag is kept
    /// but not interpreted.
    CodeBlock { language: Option<String>, text: String },
    /// Quoted child blocks.
    Blockquote(Vec<Block>),
    /// Ordered or unordered list.
    List(List),
    /// GFM table.
    Table(Table),
    /// Horizontal rule.
    ThematicBreak,
    /// Bare inline content outside a paragraph (tight list items).
    TextBlock(Vec<Inline>),
    /// Unknown block kind: children render with no decoration.
    Container(Vec<Block>),
}

/// A list node. Children are always [`ListItem`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    /// First number of an ordered list; unused for unordered lists.
    pub start: u64,
    pub items: Vec<ListItem>,
}

/// One list item. Direct children partition into own content and nested
/// lists; nested lists always render after the item's own content.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub children: Vec<Block>,
}

/// A GFM table. The alignment vector may be shorter than the widest row;
/// missing entries default to [`Alignment::None`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub alignments: Vec<Alignment>,
}

/// One table row; `header` marks rows above the separator line.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub header: bool,
    pub cells: Vec<Vec<Inline>>,
}

/// An inline node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Raw text segment.
    Text(String),
    /// Soft line break, rendered as a space.
    SoftBreak,
    /// Hard line break, rendered as a newline.
    HardBreak,
    /// Inline code span, already flattened to its text content.
    Code(String),
    /// Italic emphasis.
    Emphasis(Vec<Inline>),
    /// Bold emphasis.
    Strong(Vec<Inline>),
    /// GFM strikethrough.
    Strikethrough(Vec<Inline>),
    /// Link with rendered children and destination URL.
    Link { children: Vec<Inline>, url: String },
    /// Autolink; the literal URL as typed.
    AutoLink(String),
    /// Image; children are the alt text.
    Image(Vec<Inline>),
    /// GFM task list checkbox.
    TaskMarker(bool),
    /// Raw inline markup passed through verbatim, never interpreted.
    Html(String),
    /// Unknown inline kind: children render with no decoration.
    Other(Vec<Inline>),
}

// ============================================================
// PARSER ADAPTER
// ============================================================

/// Parser options: GFM tables, strikethrough and task lists are required
/// by the renderer and always enabled.
pub(crate) fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Parses markdown source into a document tree.
///
/// Total over its input: malformed or unexpected event sequences degrade to
/// partial trees, never to an error.
#[must_use]
pub fn parse_document(source: &str) -> Block {
    let parser = Parser::new_ext(source, parser_options());
    let mut builder = TreeBuilder::new();
    for event in parser {
        builder.handle_event(event);
    }
    builder.finish()
}

/// Open container on the build stack.
///
/// Block containers keep a `pending` buffer of loose inlines (tight list
/// item text, for example) that is flushed into a [`Block::TextBlock`]
/// before any block child is added, preserving document order.
enum Container {
    Document { blocks: Vec<Block>, pending: Vec<Inline> },
    Blockquote { blocks: Vec<Block>, pending: Vec<Inline> },
    List { ordered: bool, start: u64, items: Vec<ListItem> },
    Item { blocks: Vec<Block>, pending: Vec<Inline> },
    Foreign { blocks: Vec<Block>, pending: Vec<Inline> },
    Heading { level: u8, inlines: Vec<Inline> },
    Paragraph { inlines: Vec<Inline> },
    CodeBlock { language: Option<String>, text: String },
    Table { alignments: Vec<Alignment>, rows: Vec<TableRow> },
    Row { header: bool, cells: Vec<Vec<Inline>> },
    Cell { inlines: Vec<Inline> },
    Span { kind: SpanKind, children: Vec<Inline> },
}

enum SpanKind {
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String },
    AutoLink { url: String },
    Image,
}

struct TreeBuilder {
    stack: Vec<Container>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Container::Document {
                blocks: Vec::new(),
                pending: Vec::new(),
            }],
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => self.close_top(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            // Math is rendered as inline code.
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push_inline(Inline::Code(math.to_string()));
            }
            Event::SoftBreak => self.line_break(Inline::SoftBreak),
            Event::HardBreak => self.line_break(Inline::HardBreak),
            Event::Rule => self.push_block(Block::ThematicBreak),
            Event::TaskListMarker(checked) => self.push_inline(Inline::TaskMarker(checked)),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.to_string())),
            // Block-level HTML is not rendered.
            Event::Html(_) => {}
            Event::FootnoteReference(_) => {}
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let container = match tag {
            Tag::Paragraph => Container::Paragraph { inlines: Vec::new() },
            Tag::Heading { level, .. } => Container::Heading {
                level: heading_level(level),
                inlines: Vec::new(),
            },
            Tag::BlockQuote(_) => Container::Blockquote {
                blocks: Vec::new(),
                pending: Vec::new(),
            },
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                Container::CodeBlock {
                    language,
                    text: String::new(),
                }
            }
            Tag::List(start) => Container::List {
                ordered: start.is_some(),
                start: start.unwrap_or(1),
                items: Vec::new(),
            },
            Tag::Item => Container::Item {
                blocks: Vec::new(),
                pending: Vec::new(),
            },
            Tag::Table(alignments) => Container::Table {
                alignments: alignments.into_iter().map(Alignment::from).collect(),
                rows: Vec::new(),
            },
            Tag::TableHead => Container::Row {
                header: true,
                cells: Vec::new(),
            },
            Tag::TableRow => Container::Row {
                header: false,
                cells: Vec::new(),
            },
            Tag::TableCell => Container::Cell { inlines: Vec::new() },
            Tag::Emphasis => Container::Span {
                kind: SpanKind::Emphasis,
                children: Vec::new(),
            },
            Tag::Strong => Container::Span {
                kind: SpanKind::Strong,
                children: Vec::new(),
            },
            Tag::Strikethrough => Container::Span {
                kind: SpanKind::Strikethrough,
                children: Vec::new(),
            },
            Tag::Link {
                link_type, dest_url, ..
            } => {
                let kind = match link_type {
                    LinkType::Autolink | LinkType::Email => SpanKind::AutoLink {
                        url: dest_url.to_string(),
                    },
                    _ => SpanKind::Link {
                        url: dest_url.to_string(),
                    },
                };
                Container::Span {
                    kind,
                    children: Vec::new(),
                }
            }
            Tag::Image { .. } => Container::Span {
                kind: SpanKind::Image,
                children: Vec::new(),
            },
            // Footnote definitions, HTML blocks and future block kinds.
            _ => Container::Foreign {
                blocks: Vec::new(),
                pending: Vec::new(),
            },
        };
        self.stack.push(container);
    }

    fn text(&mut self, text: &str) {
        if let Some(Container::CodeBlock { text: buffer, .. }) = self.stack.last_mut() {
            buffer.push_str(text);
            return;
        }
        self.push_inline(Inline::Text(text.to_string()));
    }

    fn line_break(&mut self, kind: Inline) {
        if let Some(Container::CodeBlock { text: buffer, .. }) = self.stack.last_mut() {
            buffer.push('\n');
            return;
        }
        self.push_inline(kind);
    }

    fn push_inline(&mut self, inline: Inline) {
        match self.stack.last_mut() {
            Some(Container::Span { children, .. }) => children.push(inline),
            Some(
                Container::Heading { inlines, .. }
                | Container::Paragraph { inlines }
                | Container::Cell { inlines },
            ) => inlines.push(inline),
            Some(
                Container::Document { pending, .. }
                | Container::Blockquote { pending, .. }
                | Container::Item { pending, .. }
                | Container::Foreign { pending, .. },
            ) => pending.push(inline),
            _ => {}
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(
                Container::Document { blocks, pending }
                | Container::Blockquote { blocks, pending }
                | Container::Item { blocks, pending }
                | Container::Foreign { blocks, pending },
            ) => {
                flush_pending(pending, blocks);
                blocks.push(block);
            }
            _ => tracing::debug!("dropping block without an open block container"),
        }
    }

    fn close_top(&mut self) {
        if self.stack.len() <= 1 {
            tracing::debug!("ignoring unbalanced end event");
            return;
        }
        let Some(top) = self.stack.pop() else { return };
        match top {
            Container::Document { .. } => {}
            Container::Heading { level, inlines } => self.push_block(Block::Heading {
                level,
                content: inlines,
            }),
            Container::Paragraph { inlines } => self.push_block(Block::Paragraph(inlines)),
            Container::CodeBlock { language, text } => {
                self.push_block(Block::CodeBlock { language, text });
            }
            Container::Blockquote {
                mut blocks,
                mut pending,
            } => {
                flush_pending(&mut pending, &mut blocks);
                self.push_block(Block::Blockquote(blocks));
            }
            Container::List {
                ordered,
                start,
                items,
            } => self.push_block(Block::List(List {
                ordered,
                start,
                items,
            })),
            Container::Item {
                mut blocks,
                mut pending,
            } => {
                flush_pending(&mut pending, &mut blocks);
                if let Some(Container::List { items, .. }) = self.stack.last_mut() {
                    items.push(ListItem { children: blocks });
                } else {
                    // An item outside a list: degrade to a plain container.
                    self.push_block(Block::Container(blocks));
                }
            }
            Container::Foreign {
                mut blocks,
                mut pending,
            } => {
                flush_pending(&mut pending, &mut blocks);
                self.push_block(Block::Container(blocks));
            }
            Container::Table { alignments, rows } => {
                self.push_block(Block::Table(Table { rows, alignments }));
            }
            Container::Row { header, cells } => {
                if let Some(Container::Table { rows, .. }) = self.stack.last_mut() {
                    rows.push(TableRow { header, cells });
                }
            }
            Container::Cell { inlines } => {
                if let Some(Container::Row { cells, .. }) = self.stack.last_mut() {
                    cells.push(inlines);
                }
            }
            Container::Span { kind, children } => {
                let inline = match kind {
                    SpanKind::Emphasis => Inline::Emphasis(children),
                    SpanKind::Strong => Inline::Strong(children),
                    SpanKind::Strikethrough => Inline::Strikethrough(children),
                    SpanKind::Link { url } => Inline::Link { children, url },
                    SpanKind::AutoLink { url } => {
                        let text = plain_text(&children);
                        Inline::AutoLink(if text.is_empty() { url } else { text })
                    }
                    SpanKind::Image => Inline::Image(children),
                };
                self.push_inline(inline);
            }
        }
    }

    fn finish(mut self) -> Block {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(Container::Document {
                mut blocks,
                mut pending,
            }) => {
                flush_pending(&mut pending, &mut blocks);
                Block::Document(blocks)
            }
            _ => Block::Document(Vec::new()),
        }
    }
}

fn flush_pending(pending: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    if !pending.is_empty() {
        blocks.push(Block::TextBlock(std::mem::take(pending)));
    }
}

fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        if let Inline::Text(text) = inline {
            out.push_str(text);
        }
    }
    out
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn document_blocks(source: &str) -> Vec<Block> {
        match parse_document(source) {
            Block::Document(blocks) => blocks,
            other => panic!("expected document root, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_is_empty_document() {
        assert_eq!(document_blocks(""), Vec::new());
    }

    #[test]
    fn test_heading_levels() {
        let blocks = document_blocks("# One\n\n#### Four");
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::Heading { level: 4, .. }));
    }

    #[test]
    fn test_tight_item_text_becomes_text_block() {
        let blocks = document_blocks("- alpha");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {blocks:?}");
        };
        assert!(!list.ordered);
        assert_eq!(list.items.len(), 1);
        assert!(matches!(list.items[0].children[0], Block::TextBlock(_)));
    }

    #[test]
    fn test_nested_list_follows_own_content() {
        let blocks = document_blocks("- outer\n  - inner");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list");
        };
        let children = &list.items[0].children;
        assert!(matches!(children[0], Block::TextBlock(_)));
        assert!(matches!(children[1], Block::List(_)));
    }

    #[test]
    fn test_ordered_list_start() {
        let blocks = document_blocks("3. first\n4. second");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list");
        };
        assert!(list.ordered);
        assert_eq!(list.start, 3);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_task_markers() {
        let blocks = document_blocks("- [x] done\n- [ ] todo");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list");
        };
        let Block::TextBlock(inlines) = &list.items[0].children[0] else {
            panic!("expected text block");
        };
        assert_eq!(inlines[0], Inline::TaskMarker(true));
    }

    #[test]
    fn test_table_header_and_alignments() {
        let src = "| Name | Age |\n|:-----|----:|\n| Alice | 30 |";
        let blocks = document_blocks(src);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table, got {blocks:?}");
        };
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[0].header);
        assert!(!table.rows[1].header);
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
    }

    #[test]
    fn test_autolink_keeps_literal_text() {
        let blocks = document_blocks("<https://example.com>");
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(inlines[0], Inline::AutoLink("https://example.com".into()));
    }

    #[test]
    fn test_code_block_keeps_raw_text() {
        let blocks = document_blocks("```rust\nlet x = 1;\n```");
        let Block::CodeBlock { language, text } = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(language.as_deref(), Some("rust"));
        assert_eq!(text, "let x = 1;\n");
    }

    #[test]
    fn test_blockquote_children() {
        let blocks = document_blocks("> quoted text");
        let Block::Blockquote(children) = &blocks[0] else {
            panic!("expected blockquote");
        };
        assert!(matches!(children[0], Block::Paragraph(_)));
    }
}
