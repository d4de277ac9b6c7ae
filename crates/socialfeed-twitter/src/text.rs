//! Display-width aware text clipping.

use unicode_width::UnicodeWidthChar;

/// Clips `text` to the characters starting at character offset `start` whose
/// cumulative display width fits in `width` columns.
///
/// Offsets count characters, never bytes, so multi-byte text is never split
/// inside a code point. East-Asian wide characters take two columns;
/// zero-width characters take none and stay attached to the preceding
/// character. Control characters count as one column.
#[must_use]
pub fn clip_to_width(text: &str, start: usize, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .skip(start)
        .take_while(|&c| {
            used += c.width().unwrap_or(1);
            used <= width
        })
        .collect()
}
