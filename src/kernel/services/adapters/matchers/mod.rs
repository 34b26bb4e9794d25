//! Matcher implementations
//!
//! - SearchMatcher: literal / regex / mapped pattern search
//! - WordStartMatcher, TokenStartMatcher, AnywhereMatcher: positions inside lines
//! - LineStartMatcher, LineStartSkipWhitespaceMatcher, VerticalMatcher: one per line

mod anywhere;
mod line;
mod search;
mod token;
mod word;

use unicode_xid::UnicodeXID;

use crate::kernel::services::ports::{
    JumpOptions, MappingTable, Matcher, MatcherKind, MatcherResult,
};

#[inline]
fn is_word_char(ch: char) -> bool {
    UnicodeXID::is_xid_continue(ch)
}

pub use anywhere::AnywhereMatcher;
pub use line::{LineStartMatcher, LineStartSkipWhitespaceMatcher, VerticalMatcher};
pub use search::SearchMatcher;
pub use token::TokenStartMatcher;
pub use word::WordStartMatcher;

/// Builds the matcher selected by `kind`. Pattern kinds fail on an empty or
/// missing pattern; nothing is scanned with a matcher that failed to build.
pub fn build_matcher(
    kind: MatcherKind,
    pattern: Option<&str>,
    opts: &JumpOptions,
    mappings: &dyn MappingTable,
) -> MatcherResult<Box<dyn Matcher>> {
    let pattern = pattern.unwrap_or_default();
    let matcher: Box<dyn Matcher> = match kind {
        MatcherKind::Search => Box::new(SearchMatcher::literal(pattern, opts)?),
        MatcherKind::Regex => Box::new(SearchMatcher::regex(pattern, opts)?),
        MatcherKind::SearchMapped => {
            Box::new(SearchMatcher::with_mapping(pattern, opts, mappings)?)
        }
        MatcherKind::WordStart => Box::new(WordStartMatcher),
        MatcherKind::TokenStart => Box::new(TokenStartMatcher::new()?),
        MatcherKind::LineStart => Box::new(LineStartMatcher),
        MatcherKind::LineStartSkipWhitespace => Box::new(LineStartSkipWhitespaceMatcher),
        MatcherKind::Vertical => Box::new(VerticalMatcher),
        MatcherKind::Anywhere => Box::new(AnywhereMatcher),
    };
    tracing::debug!(kind = kind.name(), "matcher built");
    Ok(matcher)
}
