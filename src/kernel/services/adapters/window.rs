//! Window contexts built from in-memory rope buffers.

use ropey::Rope;

use crate::kernel::services::ports::{
    BufferHandle, HintDirection, LineContext, Position, WindowContext, WindowContextProvider,
    WindowHandle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_row: usize,
    pub height: usize,
    pub leftmost_col: usize,
    pub width: Option<usize>,
}

impl Viewport {
    /// A viewport showing `height` whole lines from the top of the buffer.
    pub fn rows(height: usize) -> Self {
        Self {
            top_row: 0,
            height,
            leftmost_col: 0,
            width: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RopeWindow {
    pub window: WindowHandle,
    pub buffer: BufferHandle,
    pub rope: Rope,
    pub viewport: Viewport,
    pub cursor: Position,
}

impl RopeWindow {
    fn context(&self, direction: Option<HintDirection>) -> WindowContext {
        let len_lines = self.rope.len_lines();
        let top = self.viewport.top_row.min(len_lines);
        let bottom = (top + self.viewport.height).min(len_lines);
        let cursor_row = self.cursor.row.clamp(top, bottom.saturating_sub(1).max(top));

        let rows = match direction {
            Some(HintDirection::BeforeCursor) => top..(cursor_row + 1).min(bottom),
            Some(HintDirection::AfterCursor) => cursor_row..bottom,
            None => top..bottom,
        };

        let lines = rows
            .map(|row| {
                let line = self.rope.line(row).to_string();
                let text = line.trim_end_matches(&['\n', '\r'][..]);
                LineContext::new(row, text)
            })
            .collect();

        WindowContext {
            window: self.window,
            buffer: self.buffer,
            cursor: self.cursor,
            leftmost_col: self.viewport.leftmost_col,
            width: self.viewport.width,
            lines,
        }
    }
}

/// A fixed set of rope backed windows, one of them focused.
#[derive(Debug, Clone, Default)]
pub struct RopeWindowProvider {
    windows: Vec<RopeWindow>,
    focused: WindowHandle,
}

impl RopeWindowProvider {
    pub fn new(focused: WindowHandle) -> Self {
        Self {
            windows: Vec::new(),
            focused,
        }
    }

    pub fn push(&mut self, window: RopeWindow) {
        self.windows.push(window);
    }

    pub fn with_window(mut self, window: RopeWindow) -> Self {
        self.push(window);
        self
    }

    pub fn set_focused(&mut self, focused: WindowHandle) {
        self.focused = focused;
    }
}

impl WindowContextProvider for RopeWindowProvider {
    fn focused_window(&self) -> WindowHandle {
        self.focused
    }

    fn window_contexts(&self, direction: Option<HintDirection>) -> Vec<WindowContext> {
        let focused = self.windows.iter().filter(|w| w.window == self.focused);
        let others = self.windows.iter().filter(|w| w.window != self.focused);
        focused
            .chain(others)
            .map(|w| w.context(direction))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/window.rs"]
mod tests;
