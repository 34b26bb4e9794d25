//! Headless jump target core.

pub mod jump;
pub mod services;

pub use jump::{
    jump_targets_by_scanning_lines, jump_targets_for_current_line, IndirectJumpTarget,
    JumpTarget, Locations,
};
