//! Box-drawing characters for table borders.

/// Horizontal line: ─
pub(super) const HORIZONTAL: char = '\u{2500}';
/// Vertical line: │
pub(super) const VERTICAL: char = '\u{2502}';
/// Cross intersection: ┼
pub(super) const CROSS: char = '\u{253C}';
/// Left tee: ├
pub(super) const T_RIGHT: char = '\u{251C}';
/// Right tee: ┤
pub(super) const T_LEFT: char = '\u{2524}';
