//! Status entries and the groups that hold them.
//!
//! # Public API
//! - [`StatusEntry`]: One path with its change code
//! - [`GroupKind`]: Which of the three screen sections a group is
//! - [`Group`]: Ordered, labeled collection of entries rendered as one section

use crate::core::{
    line::{LineColor, RenderLine},
    status_code::StatusCode,
};
use serde::{Deserialize, Serialize};

/// One path listed on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    code: StatusCode,
    path: String,
}

impl StatusEntry {
    pub fn new(code: StatusCode, path: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
        }
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Renames, copies and conflicts are listed but not handled specially
    pub fn is_unclassified(&self) -> bool {
        self.code.is_unclassified()
    }

    /// Text of the entry's row
    pub fn line_text(&self) -> String {
        format!("       {} {}", self.code.as_char(), self.path)
    }
}

/// Screen sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Staged,
    Unstaged,
    Untracked,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::Staged, GroupKind::Unstaged, GroupKind::Untracked];

    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Staged => "Changes to be committed",
            GroupKind::Unstaged => "Changes not staged for commit",
            GroupKind::Untracked => "Untracked files",
        }
    }

    /// Position of the group in the screen's group array
    pub fn index(&self) -> usize {
        match self {
            GroupKind::Staged => 0,
            GroupKind::Unstaged => 1,
            GroupKind::Untracked => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Group {
    kind: GroupKind,
    entries: Vec<StatusEntry>,
    emphasis: LineColor,
}

impl Group {
    pub fn new(kind: GroupKind, emphasis: LineColor) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            emphasis,
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Replace the entries with a stably path-sorted copy of `entries`
    pub fn sorted_assign(&mut self, mut entries: Vec<StatusEntry>) {
        // `str` ordering is byte-wise
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        self.entries = entries;
    }

    /// Header followed by one row per entry; nothing at all when empty
    pub fn lines(&self) -> Vec<RenderLine> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(RenderLine::plain(format!("{}:", self.label())));
        lines.extend(
            self.entries
                .iter()
                .map(|entry| RenderLine::colored(entry.line_text(), self.emphasis)),
        );
        lines
    }
}
