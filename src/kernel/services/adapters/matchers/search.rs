//! Pattern search matchers.
//!
//! - Literal: case sensitive literals go through a memchr `Finder`, everything
//!   else through a compiled `Regex`.
//! - Regex: the pattern is a regular expression.
//! - Mapped: the literal OR the alternate pattern from a `MappingTable`.

use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};

use crate::kernel::services::ports::{
    JumpOptions, MappingTable, MatchContext, Matcher, MatcherError, MatcherResult,
};

enum Engine {
    Literal(Finder<'static>),
    Regex(Regex),
}

pub struct SearchMatcher {
    engine: Engine,
}

impl SearchMatcher {
    pub fn literal(pattern: &str, opts: &JumpOptions) -> MatcherResult<Self> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }
        if opts.ignores_case(pattern) {
            return Self::compile(&regex::escape(pattern), true);
        }
        Ok(Self {
            engine: Engine::Literal(Finder::new(pattern.as_bytes()).into_owned()),
        })
    }

    pub fn regex(pattern: &str, opts: &JumpOptions) -> MatcherResult<Self> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }
        Self::compile(pattern, opts.ignores_case(pattern))
    }

    pub fn with_mapping(
        pattern: &str,
        opts: &JumpOptions,
        mappings: &dyn MappingTable,
    ) -> MatcherResult<Self> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }
        match mappings.lookup(pattern, opts).filter(|alt| !alt.is_empty()) {
            Some(alternate) => {
                let source = format!("(?:{})|(?:{})", regex::escape(pattern), alternate);
                Self::compile(&source, opts.ignores_case(pattern))
            }
            None => Self::literal(pattern, opts),
        }
    }

    fn compile(source: &str, case_insensitive: bool) -> MatcherResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            engine: Engine::Regex(regex),
        })
    }

    pub fn is_regex(&self) -> bool {
        matches!(self.engine, Engine::Regex(_))
    }
}

impl Matcher for SearchMatcher {
    fn find(&self, suffix: &str, _cx: &MatchContext) -> Option<(usize, usize)> {
        match &self.engine {
            Engine::Literal(finder) => finder
                .find(suffix.as_bytes())
                .map(|start| (start, start + finder.needle().len())),
            Engine::Regex(regex) => regex.find(suffix).map(|m| (m.start(), m.end())),
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/matchers/search.rs"]
mod tests;
