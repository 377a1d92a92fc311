//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`IaddError`] which covers every failure mode of git-iadd.
//! It uses `thiserror` for ergonomic error definitions and provides constructor
//! helpers for the struct variants.
//!
//! # Public API
//! - [`IaddError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, IaddError>`
//!
//! # Error Categories
//! - **Startup**: Repository not found, unreadable configuration
//! - **Status**: Failures while reading the working tree
//! - **Invariants**: Status combinations the classification policy rules out
//! - **Mutations**: `add` / `unstage` failures
//! - **Selection**: Operating on the cursor while nothing is listed

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-iadd
#[derive(Error, Debug)]
pub enum IaddError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("Failed to read working tree status: {source}")]
    StatusQuery { source: git2::Error },

    // Classification invariants
    #[error("Abnormal status: unexpected untracked file in index: {path}")]
    UntrackedInIndex { path: String },

    // Mutation errors
    #[error("Failed to add '{path}': {message}")]
    AddFailed { path: String, message: String },

    #[error("Failed to unstage '{path}': {message}")]
    UnstageFailed { path: String, message: String },

    // Selection errors
    #[error("No file is selected")]
    NoSelection,

    // Configuration errors
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using IaddError
pub type Result<T> = std::result::Result<T, IaddError>;

impl IaddError {
    /// Create a status query error
    pub fn status_query(source: git2::Error) -> Self {
        Self::StatusQuery { source }
    }

    /// Create an untracked-in-index invariant violation
    pub fn untracked_in_index(path: impl Into<String>) -> Self {
        Self::UntrackedInIndex { path: path.into() }
    }

    /// Create an add failed error
    pub fn add_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AddFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unstage failed error
    pub fn unstage_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnstageFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True for errors that signal a broken internal assumption rather than
    /// a condition the user can fix.
    pub fn is_internal_defect(&self) -> bool {
        matches!(self, Self::UntrackedInIndex { .. })
    }

    /// True for failed stage/unstage operations, which leave the screen usable.
    pub fn is_mutation_failure(&self) -> bool {
        matches!(self, Self::AddFailed { .. } | Self::UnstageFailed { .. })
    }
}
