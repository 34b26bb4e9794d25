//! Single line scanning.

use crate::core::text_window::{
    char_to_byte, clamp_to_char_boundary, next_char_boundary, visible_byte_range,
};
use crate::kernel::services::ports::{
    HintDirection, HintPosition, LineContext, MatchContext, Matcher, Position, WindowContext,
};

use super::JumpTarget;

/// How one line is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Truncate the line at the window cursor; only set on the line where the
    /// scan direction starts or ends.
    pub truncate: Option<HintDirection>,
    /// Direction of the whole jump, handed to the matcher on every line.
    pub direction: Option<HintDirection>,
    pub hint_position: HintPosition,
    pub max_scan_chars: usize,
}

/// Collects the jump targets `matcher` finds on the visible part of `line`,
/// left to right.
pub fn scan_line(
    window: &WindowContext,
    line: &LineContext,
    matcher: &dyn Matcher,
    scan: LineScan,
) -> Vec<JumpTarget> {
    let text = line.text.as_str();
    let visible = visible_byte_range(text, window.leftmost_col, window.width);
    let mut start = visible.start;
    let mut end = start + char_to_byte(&text[visible], scan.max_scan_chars);

    match scan.truncate {
        Some(HintDirection::AfterCursor) => {
            start = clamp_to_char_boundary(text, window.cursor.col).clamp(start, end);
        }
        Some(HintDirection::BeforeCursor) => {
            end = clamp_to_char_boundary(text, window.cursor.col).clamp(start, end);
        }
        None => {}
    }

    let bias = start;
    let haystack = &text[start..end];
    // Truncated away by horizontal scrolling: nothing on this line is visible.
    if haystack.is_empty() && bias > 0 {
        return Vec::new();
    }

    let cx = MatchContext {
        leftmost_col: window.leftmost_col,
        direction: scan.direction,
    };

    let mut targets = Vec::new();
    let mut col = 0usize;
    loop {
        let suffix = &haystack[col..];
        let Some((begin, end)) = matcher.find(suffix, &cx) else {
            break;
        };
        debug_assert!(begin <= end && end <= suffix.len(), "span out of bounds");
        let begin = clamp_to_char_boundary(suffix, begin);
        let end = clamp_to_char_boundary(suffix, end).max(begin);

        let len = end - begin;
        // Anchors sit between cells; give them the cell that follows.
        let end = if begin == end {
            next_char_boundary(suffix, begin)
        } else {
            end
        };

        let offset = match scan.hint_position {
            HintPosition::Start => begin,
            HintPosition::Middle => clamp_to_char_boundary(suffix, (begin + end) / 2),
            HintPosition::End => clamp_to_char_boundary(suffix, end - 1),
        };

        targets.push(JumpTarget {
            window: window.window,
            buffer: window.buffer,
            cursor: Position::new(line.row, bias + col + offset),
            len,
        });

        if matcher.oneshot() || suffix.is_empty() {
            break;
        }

        col += end;
        if col > haystack.len() {
            break;
        }
    }

    targets
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/jump/scanner.rs"]
mod tests;
