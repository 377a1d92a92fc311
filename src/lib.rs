//! git-iadd - A minimal interactive `git add` for the terminal.
//!
//! This library provides the status screen model behind git-iadd: classification of
//! per-file status codes into staged, unstaged and untracked groups, a flat cursor
//! over those groups, and rendering into display-agnostic lines. The repository and
//! terminal sides are thin adapters around `git2` and `ratatui`.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The screen model and its groups
//! - The repository adapter
//! - Error handling and result types
//! - Display configuration

pub mod commands;
pub mod core;
pub mod ui;

// Re-export the core public API for external users
pub use core::{
    format_error, print_defect, print_error, FileStatus, GitRepo, Group, GroupKind, IaddError,
    LineColor, RenderLine, Result, ScreenConfig, ScreenModel, StatusCode, StatusEntry, StatusMap,
    WorkingTree,
};
