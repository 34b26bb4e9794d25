use crate::kernel::services::ports::{MatchContext, Matcher};

use super::is_word_char;

/// Start of each maximal run of word characters; the span covers the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordStartMatcher;

impl Matcher for WordStartMatcher {
    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        let (begin, _) = suffix.char_indices().find(|&(_, ch)| is_word_char(ch))?;
        let end = suffix[begin..]
            .char_indices()
            .find(|&(_, ch)| !is_word_char(ch))
            .map(|(idx, _)| begin + idx)
            .unwrap_or(suffix.len());
        Some((begin, end))
    }
}
