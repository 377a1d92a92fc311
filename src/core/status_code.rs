//! Type-safe single-character change codes.
//!
//! This module defines [`StatusCode`], the change classification carried by every
//! status entry, and [`FileStatus`], the pair of codes (index side and worktree side)
//! reported for one path.
//!
//! # Public API
//! - [`StatusCode`]: Enumeration of the recognized change codes
//! - [`FileStatus`]: Staging/worktree code pair for one path
//! - [`StatusMap`]: Path to [`FileStatus`] mapping produced by a status query
//!
//! # Key Features
//! - **git2 integration**: Direct conversion from `git2::Status` flags, per side
//! - **Display formatting**: One character per code, as shown on screen
//! - **Unclassified codes**: Renamed, copied and conflicted are flagged, not dropped

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Change code of one side (index or worktree) of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// No change ( )
    Unmodified,
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Not under version control (?)
    Untracked,
    /// Conflict left by a merge (U)
    UpdatedButUnmerged,
}

impl StatusCode {
    /// Index-side code for a set of git2 status flags
    pub fn staging_from_git2(flags: git2::Status) -> StatusCode {
        if flags.contains(git2::Status::CONFLICTED) {
            return StatusCode::UpdatedButUnmerged;
        }
        // git2 reports untracked files on the worktree side only
        if flags.contains(git2::Status::WT_NEW) {
            return StatusCode::Untracked;
        }
        if flags.contains(git2::Status::INDEX_NEW) {
            return StatusCode::Added;
        }
        if flags.intersects(git2::Status::INDEX_MODIFIED | git2::Status::INDEX_TYPECHANGE) {
            return StatusCode::Modified;
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return StatusCode::Deleted;
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return StatusCode::Renamed;
        }

        StatusCode::Unmodified
    }

    /// Worktree-side code for a set of git2 status flags
    pub fn worktree_from_git2(flags: git2::Status) -> StatusCode {
        if flags.contains(git2::Status::CONFLICTED) {
            return StatusCode::UpdatedButUnmerged;
        }
        if flags.contains(git2::Status::WT_NEW) {
            return StatusCode::Untracked;
        }
        if flags.intersects(git2::Status::WT_MODIFIED | git2::Status::WT_TYPECHANGE) {
            return StatusCode::Modified;
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return StatusCode::Deleted;
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return StatusCode::Renamed;
        }

        StatusCode::Unmodified
    }

    /// Get the character shown on screen
    pub fn as_char(&self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Modified => 'M',
            StatusCode::Added => 'A',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::Copied => 'C',
            StatusCode::Untracked => '?',
            StatusCode::UpdatedButUnmerged => 'U',
        }
    }

    pub fn is_untracked(&self) -> bool {
        matches!(self, StatusCode::Untracked)
    }

    /// True for any code other than [`StatusCode::Unmodified`]
    pub fn is_change(&self) -> bool {
        !matches!(self, StatusCode::Unmodified)
    }

    /// Codes listed on screen without dedicated handling (renames, copies, conflicts)
    pub fn is_unclassified(&self) -> bool {
        matches!(
            self,
            StatusCode::Renamed | StatusCode::Copied | StatusCode::UpdatedButUnmerged
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for StatusCode {
    type Error = char;

    fn try_from(code: char) -> std::result::Result<Self, Self::Error> {
        match code {
            ' ' => Ok(StatusCode::Unmodified),
            'M' => Ok(StatusCode::Modified),
            'A' => Ok(StatusCode::Added),
            'D' => Ok(StatusCode::Deleted),
            'R' => Ok(StatusCode::Renamed),
            'C' => Ok(StatusCode::Copied),
            '?' => Ok(StatusCode::Untracked),
            'U' => Ok(StatusCode::UpdatedButUnmerged),
            other => Err(other),
        }
    }
}

/// Index-side and worktree-side codes of one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    pub staging: StatusCode,
    pub worktree: StatusCode,
}

impl FileStatus {
    pub fn new(staging: StatusCode, worktree: StatusCode) -> Self {
        Self { staging, worktree }
    }

    pub fn from_git2(flags: git2::Status) -> Self {
        Self {
            staging: StatusCode::staging_from_git2(flags),
            worktree: StatusCode::worktree_from_git2(flags),
        }
    }
}

/// Status of every changed path, keyed by repository-relative path.
pub type StatusMap = BTreeMap<String, FileStatus>;
