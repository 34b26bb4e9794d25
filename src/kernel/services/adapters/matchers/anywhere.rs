use crate::kernel::services::ports::{MatchContext, Matcher};

use super::is_word_char;

/// Word starts, word ends (last char), lower-to-upper humps, the char after an
/// underscore and the char after `#`.
///
/// The span runs from a target to the next target in the same word, so the
/// scanner resumes exactly on the next one. `#` is not a word char, which makes
/// the char after it a word start.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnywhereMatcher;

impl Matcher for AnywhereMatcher {
    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        let (begin, first) = suffix.char_indices().find(|&(_, ch)| is_word_char(ch))?;
        let rest = begin + first.len_utf8();

        let mut prev = first;
        let mut chars = suffix[rest..]
            .char_indices()
            .map(|(idx, ch)| (rest + idx, ch))
            .peekable();
        while let Some((idx, ch)) = chars.next() {
            if !is_word_char(ch) {
                break;
            }
            let word_end = chars.peek().map_or(true, |&(_, next)| !is_word_char(next));
            let hump = prev.is_lowercase() && ch.is_uppercase();
            if hump || prev == '_' || word_end {
                return Some((begin, idx));
            }
            prev = ch;
        }

        Some((begin, rest))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matchers/anywhere.rs"]
mod tests;
