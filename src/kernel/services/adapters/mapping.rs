use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::{JumpOptions, MappingTable, Settings};

/// Character to alternates table, e.g. `'a' -> "ф"` for a Cyrillic layout.
///
/// A pattern becomes one character class per mapped character, so `"ab"`
/// with `'a' -> "ф"` looks up `[aф]b`.
#[derive(Debug, Clone, Default)]
pub struct StaticMappingTable {
    table: FxHashMap<char, CompactString>,
}

impl StaticMappingTable {
    pub fn new(table: FxHashMap<char, CompactString>) -> Self {
        Self { table }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mappings.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn alternates(&self, ch: char, ignore_case: bool) -> Option<&CompactString> {
        self.table.get(&ch).or_else(|| {
            if !ignore_case {
                return None;
            }
            ch.to_lowercase()
                .next()
                .filter(|lower| *lower != ch)
                .and_then(|lower| self.table.get(&lower))
        })
    }
}

impl MappingTable for StaticMappingTable {
    fn lookup(&self, pattern: &str, opts: &JumpOptions) -> Option<String> {
        let ignore_case = opts.ignores_case(pattern);
        if !pattern
            .chars()
            .any(|ch| self.alternates(ch, ignore_case).is_some())
        {
            return None;
        }

        let mut buf = [0u8; 4];
        let mut out = String::with_capacity(pattern.len() * 4);
        for ch in pattern.chars() {
            let literal = regex::escape(ch.encode_utf8(&mut buf));
            match self.alternates(ch, ignore_case) {
                Some(alts) => {
                    out.push('[');
                    out.push_str(&literal);
                    for alt in alts.chars() {
                        out.push_str(&regex::escape(alt.encode_utf8(&mut buf)));
                    }
                    out.push(']');
                }
                None => out.push_str(&literal),
            }
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/mapping.rs"]
mod tests;
