use regex::Regex;

use crate::kernel::services::ports::{MatchContext, Matcher, MatcherResult};

// Alternation order matters: the regex engine is leftmost-first.
const TOKEN_PATTERN: &str = concat!(
    r"\p{Lu}\p{Ll}+",
    r"|\p{Lu}+",
    r"|\p{Ll}+",
    r"|0[xX][0-9a-fA-F]+",
    r"|0[oO][0-7]+",
    r"|0[bB][01]+",
    r"|[0-9]+(?:\.[0-9]+)?",
    r"|[()\[\]{}<>,;:.=+\-*/&|!?]",
);

/// Start of camel case humps, acronyms, case runs, numeric literals and a
/// few punctuation symbols.
pub struct TokenStartMatcher {
    regex: Regex,
}

impl TokenStartMatcher {
    pub fn new() -> MatcherResult<Self> {
        Ok(Self {
            regex: Regex::new(TOKEN_PATTERN)?,
        })
    }
}

impl Matcher for TokenStartMatcher {
    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        let m = self.regex.find(suffix)?;
        let (begin, mut end) = (m.start(), m.end());

        // "HTTPServer": the last capital of an acronym starts the next word.
        let token = m.as_str();
        let followed_by_lower = suffix[end..].chars().next().is_some_and(char::is_lowercase);
        if followed_by_lower && token.chars().nth(1).is_some() && token.chars().all(char::is_uppercase)
        {
            if let Some((last, _)) = token.char_indices().last() {
                end = begin + last;
            }
        }

        Some((begin, end))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matchers/token.rs"]
mod tests;
