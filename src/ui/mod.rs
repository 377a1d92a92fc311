//! Terminal adapter: key mapping, drawing and terminal setup.
//!
//! The screen model knows nothing about the terminal. This module turns its
//! [`RenderLine`](crate::core::line::RenderLine)s into ratatui widgets and
//! crossterm key events into [`Action`]s.

pub mod input;
pub mod render;
pub mod terminal;

pub use input::{action_for_key, Action};
pub use render::draw;
pub use terminal::{restore_terminal, setup_terminal, Tui};
