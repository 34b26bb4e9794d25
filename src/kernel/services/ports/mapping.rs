use super::config::JumpOptions;

/// Source of alternate search patterns, e.g. the same keys typed in another
/// keyboard layout.
pub trait MappingTable {
    /// Returns a regex source matching the alternate spelling of `pattern`, or
    /// `None` when there is nothing to add.
    fn lookup(&self, pattern: &str, opts: &JumpOptions) -> Option<String>;
}

/// Mapping table that never yields an alternate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMappings;

impl MappingTable for NoMappings {
    fn lookup(&self, _pattern: &str, _opts: &JumpOptions) -> Option<String> {
        None
    }
}
