//! Jump target aggregation over visible windows.

use crate::kernel::services::ports::{
    HintDirection, JumpOptions, LineContext, Matcher, WindowContext, WindowHandle,
};

use super::scanner::{scan_line, LineScan};
use super::score::{manhattan_distance, sort_indirect_jump_targets};
use super::Locations;

/// Targets on every visible line of every window in `windows`.
pub fn jump_targets_by_scanning_lines(
    matcher: &dyn Matcher,
    opts: &JumpOptions,
    windows: &[WindowContext],
    focused: WindowHandle,
) -> Locations {
    let mut locations = Locations::default();

    for window in windows {
        let last = window.lines.len().saturating_sub(1);
        for (i, line) in window.lines.iter().enumerate() {
            let own_line = window.window == focused && line.row == window.cursor.row;
            let Some(truncate) =
                line_truncation(opts.direction, matcher.linewise(), i == 0, i == last, own_line)
            else {
                tracing::trace!(window = window.window, row = line.row, "line skipped");
                continue;
            };
            scan_into(&mut locations, matcher, opts, window, line, truncate);
        }
    }

    apply_focus_bias(&mut locations, focused);
    sort_indirect_jump_targets(
        &mut locations.indirect_jump_targets,
        opts.reverse_distribution,
    );
    tracing::debug!(
        windows = windows.len(),
        targets = locations.len(),
        "jump targets collected"
    );
    locations
}

/// Targets on the cursor line of the first window only.
///
/// The direction truncates the line at the cursor. Linewise matchers name the
/// line itself, so they scan it whole and are not excluded as the own line.
pub fn jump_targets_for_current_line(
    matcher: &dyn Matcher,
    opts: &JumpOptions,
    windows: &[WindowContext],
    focused: WindowHandle,
) -> Locations {
    let mut locations = Locations::default();
    let Some(window) = windows.first() else {
        return locations;
    };
    let Some(line) = window.cursor_line() else {
        tracing::debug!(
            window = window.window,
            row = window.cursor.row,
            "cursor line not visible"
        );
        return locations;
    };

    let truncate = if matcher.linewise() {
        None
    } else {
        opts.direction
    };
    scan_into(&mut locations, matcher, opts, window, line, truncate);

    apply_focus_bias(&mut locations, focused);
    sort_indirect_jump_targets(
        &mut locations.indirect_jump_targets,
        opts.reverse_distribution,
    );
    tracing::debug!(targets = locations.len(), "current line jump targets collected");
    locations
}

/// Decides how a line is scanned: `None` skips it, `Some(truncate)` scans it,
/// truncated at the cursor when `truncate` is set.
fn line_truncation(
    direction: Option<HintDirection>,
    linewise: bool,
    first: bool,
    last: bool,
    own_line: bool,
) -> Option<Option<HintDirection>> {
    match direction {
        Some(HintDirection::AfterCursor) if first => {
            (!linewise).then_some(Some(HintDirection::AfterCursor))
        }
        Some(HintDirection::BeforeCursor) if last => {
            (!linewise).then_some(Some(HintDirection::BeforeCursor))
        }
        Some(_) => Some(None),
        None if linewise && own_line => None,
        None => Some(None),
    }
}

fn scan_into(
    locations: &mut Locations,
    matcher: &dyn Matcher,
    opts: &JumpOptions,
    window: &WindowContext,
    line: &LineContext,
    truncate: Option<HintDirection>,
) {
    let scan = LineScan {
        truncate,
        direction: opts.direction,
        hint_position: opts.hint_position,
        max_scan_chars: opts.max_scan_chars,
    };

    let targets = scan_line(window, line, matcher, scan);
    tracing::trace!(
        window = window.window,
        row = line.row,
        count = targets.len(),
        "line scanned"
    );
    for target in targets {
        let score = manhattan_distance(window.cursor, target.cursor, opts.distance_weight);
        locations.push(target, score);
    }
}

/// Adds `|window - focused|` strides to every score, one stride being one more
/// than the largest in-window score of this call. Targets in the focused window
/// then outrank all others whatever the distance weight.
fn apply_focus_bias(locations: &mut Locations, focused: WindowHandle) {
    let Locations {
        jump_targets,
        indirect_jump_targets,
    } = locations;
    let stride = indirect_jump_targets
        .iter()
        .map(|ijt| ijt.score)
        .max()
        .map_or(1, |max| max.saturating_add(1));

    for ijt in indirect_jump_targets.iter_mut() {
        let Some(target) = jump_targets.get(ijt.index) else {
            continue;
        };
        let distance = target.window.abs_diff(focused) as i64;
        ijt.score = ijt.score.saturating_add(distance.saturating_mul(stride));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/jump/targets.rs"]
mod tests;
