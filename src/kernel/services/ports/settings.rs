use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::JumpOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub jump: JumpOptions,
    /// Alternate characters per typed character, for searching text written
    /// in another keyboard layout.
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub mappings: FxHashMap<char, CompactString>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
