//! Coordinate conversions for the horizontally visible part of a line.
//!
//! Three coordinate systems meet here: display cells (what the window shows),
//! character indices and byte offsets into the UTF-8 line. Every byte offset
//! returned lands on a valid character boundary.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

pub fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Byte offset just past the character starting at `idx`, or `idx + 1` when
/// `idx` is at (or beyond) the end of `text`.
pub fn next_char_boundary(text: &str, idx: usize) -> usize {
    let idx = clamp_to_char_boundary(text, idx);
    match text[idx..].chars().next() {
        Some(ch) => idx + ch.len_utf8(),
        None => idx + 1,
    }
}

/// Index of the first character starting at or after display cell `cell`.
///
/// A wide character straddling `cell` is skipped: it is not fully visible.
pub fn cell_to_char_index(text: &str, cell: usize) -> usize {
    let mut used = 0usize;
    let mut count = 0usize;
    for (idx, ch) in text.chars().enumerate() {
        if used >= cell {
            return idx;
        }
        used += UnicodeWidthChar::width(ch).unwrap_or(0);
        count = idx + 1;
    }
    count
}

/// Byte offset of the `char_idx`-th character, saturating at `text.len()`.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Byte range of `text` shown by a window scrolled to `leftmost_col` cells and
/// `width` cells wide (`None` shows the rest of the line).
pub fn visible_byte_range(text: &str, leftmost_col: usize, width: Option<usize>) -> Range<usize> {
    let start = char_to_byte(text, cell_to_char_index(text, leftmost_col));
    let end = match width {
        Some(width) => start + truncate_to_width(&text[start..], width),
        None => text.len(),
    };
    debug_assert!(start <= end && end <= text.len());
    start..end
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
