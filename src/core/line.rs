//! Display-agnostic styled lines.
//!
//! The screen model renders into [`RenderLine`] values that carry plain text and
//! two [`LineColor`] tags. Terminal adapters map the tags onto their own color
//! types, so nothing here depends on a terminal library.
//!
//! # Color Scheme (defaults)
//! - **Staged entries**: Green
//! - **Unstaged and untracked entries**: Red
//! - **Headers and legend**: Terminal default
//! - **Cursor**: Yellow background

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named color tag used for foreground and background styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl LineColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineColor::Default => "default",
            LineColor::Black => "black",
            LineColor::Red => "red",
            LineColor::Green => "green",
            LineColor::Yellow => "yellow",
            LineColor::Blue => "blue",
            LineColor::Magenta => "magenta",
            LineColor::Cyan => "cyan",
            LineColor::White => "white",
        }
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of screen output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub text: String,
    pub fg: LineColor,
    pub bg: LineColor,
}

impl RenderLine {
    /// Line in the terminal's default colors (headers, legend)
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: LineColor::Default,
            bg: LineColor::Default,
        }
    }

    pub fn colored(text: impl Into<String>, fg: LineColor) -> Self {
        Self {
            text: text.into(),
            fg,
            bg: LineColor::Default,
        }
    }

    /// Same line with a different background
    pub fn with_bg(mut self, bg: LineColor) -> Self {
        self.bg = bg;
        self
    }
}
