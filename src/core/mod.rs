//! Text coordinate helpers shared by the scanner and the matchers.

pub mod text_window;
