//! Jump target discovery.
//!
//! Lines of the visible windows are scanned with a [`Matcher`], every
//! candidate becomes a [`JumpTarget`], and a parallel list of
//! [`IndirectJumpTarget`]s orders them by distance to the cursor without
//! moving the targets themselves (their line order is kept for rendering).
//!
//! [`Matcher`]: crate::kernel::services::ports::Matcher

pub mod scanner;
pub mod score;
pub mod targets;

use crate::kernel::services::ports::{BufferHandle, Position, WindowHandle};

pub use scanner::{scan_line, LineScan};
pub use score::{manhattan_distance, sort_indirect_jump_targets};
pub use targets::{jump_targets_by_scanning_lines, jump_targets_for_current_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTarget {
    pub window: WindowHandle,
    pub buffer: BufferHandle,
    pub cursor: Position,
    /// Matched length in bytes; zero for anchor matches such as line starts.
    pub len: usize,
}

/// Priority entry for the jump target at `index` in [`Locations::jump_targets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndirectJumpTarget {
    pub index: usize,
    pub score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    pub jump_targets: Vec<JumpTarget>,
    pub indirect_jump_targets: Vec<IndirectJumpTarget>,
}

impl Locations {
    pub fn len(&self) -> usize {
        self.jump_targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jump_targets.is_empty()
    }

    /// Targets in priority order, paired with their score.
    pub fn by_priority(&self) -> impl Iterator<Item = (&JumpTarget, i64)> + '_ {
        self.indirect_jump_targets
            .iter()
            .filter_map(|ijt| self.jump_targets.get(ijt.index).map(|jt| (jt, ijt.score)))
    }

    pub fn best(&self) -> Option<&JumpTarget> {
        self.by_priority().next().map(|(jt, _)| jt)
    }

    pub(crate) fn push(&mut self, target: JumpTarget, score: i64) {
        let index = self.jump_targets.len();
        self.jump_targets.push(target);
        self.indirect_jump_targets
            .push(IndirectJumpTarget { index, score });
    }
}
