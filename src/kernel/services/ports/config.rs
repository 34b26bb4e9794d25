use serde::{Deserialize, Serialize};

/// Weight applied to the row delta when scoring; favours the cursor's own row.
pub const DEFAULT_DISTANCE_WEIGHT: u32 = 10;
pub const DEFAULT_MAX_SCAN_CHARS: usize = 4096;

/// Which side of the cursor jump targets are collected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintDirection {
    BeforeCursor,
    AfterCursor,
}

/// Where inside a match span the target column is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintPosition {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<HintDirection>,
    pub hint_position: HintPosition,
    pub distance_weight: u32,
    pub reverse_distribution: bool,
    pub case_insensitive: bool,
    pub smart_case: bool,
    pub max_scan_chars: usize,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            direction: None,
            hint_position: HintPosition::Start,
            distance_weight: DEFAULT_DISTANCE_WEIGHT,
            reverse_distribution: false,
            case_insensitive: false,
            smart_case: true,
            max_scan_chars: DEFAULT_MAX_SCAN_CHARS,
        }
    }
}

impl JumpOptions {
    /// Case is ignored when asked for, or under smart case when the pattern
    /// does not start with an uppercase character.
    pub fn ignores_case(&self, pattern: &str) -> bool {
        if self.case_insensitive {
            return true;
        }
        self.smart_case && !pattern.chars().next().is_some_and(char::is_uppercase)
    }
}
