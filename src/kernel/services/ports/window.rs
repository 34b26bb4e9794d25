use super::config::HintDirection;

pub type WindowHandle = u32;
pub type BufferHandle = u32;

/// A (row, column) buffer position. Rows are 0-based; columns are byte
/// offsets into the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    pub row: usize,
    pub text: String,
}

impl LineContext {
    pub fn new(row: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
        }
    }
}

/// The visible part of one window, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowContext {
    pub window: WindowHandle,
    pub buffer: BufferHandle,
    pub cursor: Position,
    /// Leftmost visible display cell.
    pub leftmost_col: usize,
    /// Visible width in display cells; `None` shows whole lines.
    pub width: Option<usize>,
    /// Visible lines in top-to-bottom order.
    pub lines: Vec<LineContext>,
}

impl WindowContext {
    pub fn new(window: WindowHandle, buffer: BufferHandle, cursor: Position) -> Self {
        Self {
            window,
            buffer,
            cursor,
            leftmost_col: 0,
            width: None,
            lines: Vec::new(),
        }
    }

    pub fn with_lines<I, S>(mut self, first_row: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| LineContext::new(first_row + i, text))
            .collect();
        self
    }

    pub fn cursor_line(&self) -> Option<&LineContext> {
        self.lines.iter().find(|line| line.row == self.cursor.row)
    }
}

/// Host side enumeration of visible windows.
pub trait WindowContextProvider {
    fn focused_window(&self) -> WindowHandle;

    /// Visible windows, focused window first, each already clipped to the
    /// vertical span implied by `direction`.
    fn window_contexts(&self, direction: Option<HintDirection>) -> Vec<WindowContext>;
}
