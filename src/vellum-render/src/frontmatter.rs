//! YAML front matter stripping.
//!
//! Documents commonly open with a `---`-delimited metadata header that must
//! not reach the renderer. Stripping fails open: anything that merely looks
//! like front matter but has no closing delimiter is ordinary content.

use std::borrow::Cow;

/// Removes `---`-delimited front matter from the start of `source`.
///
/// Line endings are normalized (CRLF to LF) to locate the closing delimiter,
/// so a stripped result is always LF-only. A source without an opening
/// delimiter, or with an opening delimiter but no closing `---` line, is
/// returned unchanged.
#[must_use]
pub fn strip_front_matter(source: &str) -> Cow<'_, str> {
    if !source.starts_with("---") {
        return Cow::Borrowed(source);
    }
    let normalized = source.replace("\r\n", "\n");
    let Some(end) = normalized[3..].find("\n---") else {
        // No closing delimiter: not front matter.
        return Cow::Borrowed(source);
    };
    let rest = &normalized[3 + end + 4..];
    Cow::Owned(rest.trim_start_matches('\n').to_owned())
}
