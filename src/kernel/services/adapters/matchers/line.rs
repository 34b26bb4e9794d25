//! Linewise matchers: one target per line.

use crate::kernel::services::ports::{MatchContext, Matcher};

/// Span of the char starting at `begin`, or an empty span at the end of `s`.
fn char_span(s: &str, begin: usize) -> (usize, usize) {
    let end = s[begin..]
        .chars()
        .next()
        .map_or(begin, |ch| begin + ch.len_utf8());
    (begin, end)
}

/// Zero-width match at the start of every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStartMatcher;

impl Matcher for LineStartMatcher {
    fn oneshot(&self) -> bool {
        true
    }

    fn linewise(&self) -> bool {
        true
    }

    fn find(&self, _suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        Some((0, 0))
    }
}

/// First non-blank character of each line; blank lines have no target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStartSkipWhitespaceMatcher;

impl Matcher for LineStartSkipWhitespaceMatcher {
    fn oneshot(&self) -> bool {
        true
    }

    fn linewise(&self) -> bool {
        true
    }

    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        let (begin, ch) = suffix.char_indices().find(|&(_, ch)| !ch.is_whitespace())?;
        Some((begin, begin + ch.len_utf8()))
    }
}

/// The char at the window's left edge, or an empty span on a blank line.
///
/// The scanner hands over the line from the leftmost visible column on and
/// biases columns by it, so the aligned char starts the suffix. After the
/// cursor that is the first scanned column as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalMatcher;

impl Matcher for VerticalMatcher {
    fn oneshot(&self) -> bool {
        true
    }

    fn linewise(&self) -> bool {
        true
    }

    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        Some(char_span(suffix, 0))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matchers/line.rs"]
mod tests;
