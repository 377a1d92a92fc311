//! Common assertion helpers for test output validation
//!
//! Provides predicates and helpers for validating git-iadd command output
//! and rendered screen lines.

#![allow(dead_code)]

use git_iadd::{LineColor, RenderLine};
use predicates::prelude::*;

/// Creates a predicate that checks for the not-a-repository diagnostic
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for a config parse diagnostic
pub fn config_parse_error() -> impl Predicate<str> {
    predicates::str::contains("Failed to parse config file")
}

/// Text of every rendered line
pub fn line_texts(lines: &[RenderLine]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}

/// Row indices whose background is `color`
pub fn rows_with_bg(lines: &[RenderLine], color: LineColor) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.bg == color)
        .map(|(row, _)| row)
        .collect()
}
