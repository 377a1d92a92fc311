//! Git repository operations.
//!
//! This module provides the repository side of git-iadd through the [`GitRepo`] struct
//! and the [`WorkingTree`] trait the screen model talks to.
//!
//! # Public API
//! - [`WorkingTree`]: Status query plus add/unstage of a single path
//! - [`GitRepo`]: `git2`-backed implementation of [`WorkingTree`]
//!
//! # Key Features
//! - **Status reading**: Convert git2 status flags to per-side [`StatusCode`] pairs
//! - **File staging**: `git add` of one path, deletions included
//! - **File unstaging**: Reset one index entry to HEAD, or drop it before the first commit

use crate::core::{
    error::{IaddError, Result},
    status_code::{FileStatus, StatusMap},
};
use git2::{Repository, StatusOptions};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Repository operations needed by the status screen
pub trait WorkingTree {
    /// Status of every path that differs from HEAD or the index
    fn status(&self) -> Result<StatusMap>;

    /// Stage the worktree state of `path`
    fn add(&self, path: &str) -> Result<()>;

    /// Remove `path` from the index without touching the worktree
    fn unstage(&self, path: &str) -> Result<()>;
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("Repository discovery from {} failed: {e}", path.display());
            IaddError::NotInGitRepo
        })?;
        if repo.workdir().is_none() {
            return Err(IaddError::NoWorkdir);
        }
        Ok(GitRepo { repo })
    }

    pub fn get_workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or(IaddError::NoWorkdir)
    }

    /// True before the first commit, when HEAD points at a branch that does not exist yet
    fn is_head_unborn(&self) -> bool {
        matches!(self.repo.head(), Err(e) if e.code() == git2::ErrorCode::UnbornBranch)
    }

    /// Run git in the working directory, returning stderr on failure
    fn execute_git_command(&self, args: &[&str]) -> std::result::Result<(), String> {
        let workdir = self.repo.workdir().ok_or("repository has no working directory")?;

        log::debug!("Running git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| format!("failed to run git: {e}"))?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git {} failed: {}", args[0], error_msg.trim()));
        }

        Ok(())
    }
}

impl WorkingTree for GitRepo {
    fn status(&self) -> Result<StatusMap> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(IaddError::status_query)?;
        let mut files = StatusMap::new();

        for entry in statuses.iter() {
            let flags = entry.status();
            if flags.is_empty() || flags.contains(git2::Status::IGNORED) {
                continue;
            }

            let Some(path) = entry.path() else {
                log::warn!(
                    "Skipping non UTF-8 path {}",
                    String::from_utf8_lossy(entry.path_bytes())
                );
                continue;
            };
            files.insert(path.to_string(), FileStatus::from_git2(flags));
        }

        log::debug!("Status query returned {} paths", files.len());
        Ok(files)
    }

    fn add(&self, path: &str) -> Result<()> {
        self.execute_git_command(&["add", "--", path])
            .map_err(|message| IaddError::add_failed(path, message))
    }

    fn unstage(&self, path: &str) -> Result<()> {
        let result = if self.is_head_unborn() {
            self.execute_git_command(&["rm", "--cached", "--quiet", "--", path])
        } else {
            self.execute_git_command(&["reset", "--quiet", "HEAD", "--", path])
        };
        result.map_err(|message| IaddError::unstage_failed(path, message))
    }
}
