//! Test data generation utilities and predefined scenarios
//!
//! Provides raw status maps for screen model tests and repositories with
//! specific file states for adapter tests.

#![allow(dead_code)]

use super::repository::*;
use git_iadd::core::error::Result;
use git_iadd::{FileStatus, StatusCode, StatusMap};

/// Builds a raw status map from `(path, staging, worktree)` triples
pub fn status_map(pairs: &[(&str, StatusCode, StatusCode)]) -> StatusMap {
    pairs
        .iter()
        .map(|(path, staging, worktree)| (path.to_string(), FileStatus::new(*staging, *worktree)))
        .collect()
}

/// Scenario: one staged, one unstaged and one untracked file
pub fn one_of_each() -> StatusMap {
    use StatusCode::*;
    status_map(&[
        ("a.txt", Modified, Unmodified),
        ("b.txt", Unmodified, Modified),
        ("c.txt", Untracked, Untracked),
    ])
}

/// Scenario: two unstaged and two untracked files, listed out of order
pub fn unstaged_and_untracked() -> StatusMap {
    use StatusCode::*;
    status_map(&[
        ("hoge", Unmodified, Modified),
        ("fuga", Unmodified, Modified),
        ("foo", Untracked, Untracked),
        ("bar", Untracked, Untracked),
    ])
}

/// Scenario: repository with a committed file modified both in the index and on disk,
/// plus an untracked file
///
/// After setup: `initial.txt` is partially staged and `notes.txt` is untracked.
pub fn create_partially_staged_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "initial.txt", "staged change\n")?;
    git_add(&repo.path, "initial.txt")?;
    create_file(&repo.path, "initial.txt", "staged change\nunstaged change\n")?;
    create_file(&repo.path, "notes.txt", "untracked\n")?;

    Ok(repo)
}
