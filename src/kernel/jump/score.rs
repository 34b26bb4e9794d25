use crate::kernel::services::ports::Position;

use super::IndirectJumpTarget;

/// Manhattan distance with the row delta scaled by `weight`.
pub fn manhattan_distance(a: Position, b: Position, weight: u32) -> i64 {
    let rows = a.row.abs_diff(b.row) as i64;
    let cols = a.col.abs_diff(b.col) as i64;
    (weight as i64).saturating_mul(rows).saturating_add(cols)
}

/// Orders by score, ascending unless `reverse`. Equal scores keep discovery
/// order in both directions.
pub fn sort_indirect_jump_targets(targets: &mut [IndirectJumpTarget], reverse: bool) {
    if reverse {
        targets.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    } else {
        targets.sort_by(|a, b| a.score.cmp(&b.score).then(a.index.cmp(&b.index)));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/jump/score.rs"]
mod tests;
