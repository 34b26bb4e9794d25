use serde::{Deserialize, Serialize};

use super::config::HintDirection;

pub type Result<T> = std::result::Result<T, MatcherError>;

#[derive(Debug)]
pub enum MatcherError {
    EmptyPattern,
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for MatcherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherError::EmptyPattern => write!(f, "Empty search pattern"),
            MatcherError::InvalidPattern(e) => write!(f, "Invalid pattern: {}", e),
        }
    }
}

impl std::error::Error for MatcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatcherError::EmptyPattern => None,
            MatcherError::InvalidPattern(e) => Some(e),
        }
    }
}

impl From<regex::Error> for MatcherError {
    fn from(e: regex::Error) -> Self {
        MatcherError::InvalidPattern(e)
    }
}

/// Per-line information handed to a matcher alongside the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// Leftmost visible display column of the window.
    pub leftmost_col: usize,
    /// Direction of the jump, set on every line whether or not it was
    /// truncated at the cursor.
    pub direction: Option<HintDirection>,
}

/// A matching rule.
///
/// `find` returns the first half-open byte span `[begin, end)` in `suffix`,
/// both offsets on char boundaries. The line scanner calls it repeatedly on
/// successive suffixes of the visible text.
pub trait Matcher {
    /// Stop scanning a line after its first match.
    fn oneshot(&self) -> bool {
        false
    }

    /// Matches designate a whole line rather than a position in it.
    fn linewise(&self) -> bool {
        false
    }

    fn find(&self, suffix: &str, cx: &MatchContext) -> Option<(usize, usize)>;
}

/// Selects a matcher implementation by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Search,
    Regex,
    SearchMapped,
    WordStart,
    TokenStart,
    LineStart,
    LineStartSkipWhitespace,
    Vertical,
    Anywhere,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 9] = [
        MatcherKind::Search,
        MatcherKind::Regex,
        MatcherKind::SearchMapped,
        MatcherKind::WordStart,
        MatcherKind::TokenStart,
        MatcherKind::LineStart,
        MatcherKind::LineStartSkipWhitespace,
        MatcherKind::Vertical,
        MatcherKind::Anywhere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::Search => "search",
            MatcherKind::Regex => "regex",
            MatcherKind::SearchMapped => "search_mapped",
            MatcherKind::WordStart => "word_start",
            MatcherKind::TokenStart => "token_start",
            MatcherKind::LineStart => "line_start",
            MatcherKind::LineStartSkipWhitespace => "line_start_skip_whitespace",
            MatcherKind::Vertical => "vertical",
            MatcherKind::Anywhere => "anywhere",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn needs_pattern(self) -> bool {
        matches!(
            self,
            MatcherKind::Search | MatcherKind::Regex | MatcherKind::SearchMapped
        )
    }
}
