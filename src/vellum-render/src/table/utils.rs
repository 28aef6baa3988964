//! Alignment helpers for table layout.

use super::types::Alignment;
use crate::width::visual_width;

/// Pads `text` to `width` columns according to `alignment`.
///
/// Width is measured visually, so styled cell content pads correctly. When
/// centering leaves an odd gap the extra space goes to the right.
pub(super) fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let text_width = visual_width(text);
    if text_width >= width {
        return text.to_string();
    }
    let padding = width - text_width;

    match alignment {
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
        Alignment::Left | Alignment::None => format!("{}{}", text, " ".repeat(padding)),
    }
}
