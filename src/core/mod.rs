//! Core functionality for the git-iadd tool.
//!
//! This module provides the screen model, the repository adapter, error handling,
//! configuration and logging.

pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod line;
pub mod logging;
pub mod output;
pub mod screen;
pub mod state;
pub mod status_code;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{IaddError, Result};

// === Git operations ===
// Repository adapter: status query, add, unstage
pub use git::{GitRepo, WorkingTree};

// === Status codes ===
// Per-side change codes and the raw status mapping
pub use status_code::{FileStatus, StatusCode, StatusMap};

// === Screen state ===
// Entries, groups and the cursor-carrying screen model
pub use screen::ScreenModel;
pub use state::{Group, GroupKind, StatusEntry};

// === Rendering ===
// Display-agnostic styled lines
pub use line::{LineColor, RenderLine};

// === Configuration ===
pub use config::ScreenConfig;

// === Output formatting ===
pub use output::{format_error, print_defect, print_error};
