//! List layout.
//!
//! Markers, indentation and child placement for list items. Numbering is a
//! function of an item's position among its siblings, not a running counter,
//! so re-entering the recursion per item can never skew it. Indentation
//! depends only on nesting depth, so siblings left-align regardless of
//! single- versus double-digit markers.

use crate::renderer::{RenderCtx, render_block};
use crate::tree::{Block, List, ListItem};

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 2;

/// Bullet for unordered list items.
const BULLET: &str = "•";

/// Indentation for a nesting depth.
pub(crate) fn indent(depth: usize) -> String {
    " ".repeat(INDENT_WIDTH * depth)
}

/// Marker for the item at `position` among its `ListItem` siblings.
pub(crate) fn marker(list: &List, position: usize) -> String {
    if list.ordered {
        format!("{}. ", list.start + position as u64)
    } else {
        format!("{BULLET} ")
    }
}

/// Renders one list item: marker plus own content first, then any nested
/// lists on their own following lines, never appended inline.
pub(crate) fn render_list_item(
    out: &mut String,
    item: &ListItem,
    position: usize,
    list: &List,
    ctx: RenderCtx<'_>,
) {
    let mut own = String::new();
    for child in &item.children {
        if !matches!(child, Block::List(_)) {
            render_block(&mut own, child, ctx.child());
        }
    }
    let content = own.trim_end_matches('\n');

    out.push_str(&indent(ctx.depth));
    out.push_str(&marker(list, position));
    out.push_str(content);
    out.push('\n');

    for child in &item.children {
        if matches!(child, Block::List(_)) {
            render_block(out, child, ctx.child());
        }
    }
}
