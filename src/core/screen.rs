//! The status screen model.
//!
//! [`ScreenModel`] classifies raw status pairs into three [`Group`]s, keeps a flat
//! cursor over their concatenated entries and renders everything into
//! [`RenderLine`]s.
//!
//! # Cursor
//! The cursor addresses entries only; header and legend rows are skipped. It is
//! `None` while no entry is listed and always inside `0..total_entries` otherwise.
//! A refresh keeps the cursor position and clamps it to the new entry count.

use crate::core::{
    config::ScreenConfig,
    error::{IaddError, Result},
    git::WorkingTree,
    line::{LineColor, RenderLine},
    state::{Group, GroupKind, StatusEntry},
    status_code::StatusMap,
};

#[derive(Debug, Clone)]
pub struct ScreenModel {
    groups: [Group; 3],
    cursor: Option<usize>,
    total_entries: usize,
    legend: String,
    cursor_color: LineColor,
}

impl ScreenModel {
    pub fn new(config: &ScreenConfig) -> Self {
        let colors = config.group_colors();
        Self {
            groups: GroupKind::ALL.map(|kind| Group::new(kind, colors[kind.index()])),
            cursor: None,
            total_entries: 0,
            legend: config.legend.clone(),
            cursor_color: config.cursor_color,
        }
    }

    /// Reclassify every path and clamp the cursor into the new range.
    ///
    /// On error the model is left untouched.
    pub fn refresh(&mut self, statuses: &StatusMap) -> Result<()> {
        let mut classified: [Vec<StatusEntry>; 3] = Default::default();

        for (path, status) in statuses {
            if status.worktree.is_untracked() {
                classified[GroupKind::Untracked.index()]
                    .push(StatusEntry::new(status.worktree, path.as_str()));
                continue;
            }

            if status.staging.is_untracked() {
                log::error!("Untracked file reported as staged: {path} ({status:?})");
                return Err(IaddError::untracked_in_index(path.as_str()));
            }

            if status.worktree.is_change() {
                classified[GroupKind::Unstaged.index()]
                    .push(StatusEntry::new(status.worktree, path.as_str()));
            }

            if status.staging.is_change() {
                classified[GroupKind::Staged.index()]
                    .push(StatusEntry::new(status.staging, path.as_str()));
            }
        }

        for (group, entries) in self.groups.iter_mut().zip(classified) {
            group.sorted_assign(entries);
        }

        self.total_entries = self.groups.iter().map(Group::len).sum();
        self.cursor = match self.total_entries {
            0 => None,
            total => Some(self.cursor.unwrap_or(0).min(total - 1)),
        };

        log::debug!(
            "Refreshed: {} staged, {} unstaged, {} untracked, cursor {:?}",
            self.groups[0].len(),
            self.groups[1].len(),
            self.groups[2].len(),
            self.cursor
        );
        Ok(())
    }

    pub fn group(&self, kind: GroupKind) -> &Group {
        &self.groups[kind.index()]
    }

    pub fn groups(&self) -> &[Group; 3] {
        &self.groups
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }

    /// All entries in display order
    pub fn entries(&self) -> impl Iterator<Item = &StatusEntry> {
        self.groups.iter().flat_map(|group| group.entries().iter())
    }

    pub fn move_down(&mut self) {
        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.total_entries {
                self.cursor = Some(cursor + 1);
            }
        }
    }

    pub fn move_up(&mut self) {
        if let Some(cursor) = self.cursor {
            if cursor > 0 {
                self.cursor = Some(cursor - 1);
            }
        }
    }

    /// Entry under the cursor together with the group it belongs to
    pub fn selected(&self) -> Option<(GroupKind, &StatusEntry)> {
        let mut remaining = self.cursor?;
        for group in &self.groups {
            if remaining < group.len() {
                return Some((group.kind(), &group.entries()[remaining]));
            }
            remaining -= group.len();
        }
        None
    }

    pub fn selected_path(&self) -> Result<&str> {
        self.selected()
            .map(|(_, entry)| entry.path())
            .ok_or(IaddError::NoSelection)
    }

    /// Stage the selected path. The caller refreshes afterwards.
    pub fn stage_selected<W: WorkingTree + ?Sized>(&self, tree: &W) -> Result<()> {
        let path = self.selected_path()?;
        log::debug!("Staging {path}");
        tree.add(path)
    }

    /// Unstage the selected path. The caller refreshes afterwards.
    pub fn unstage_selected<W: WorkingTree + ?Sized>(&self, tree: &W) -> Result<()> {
        let path = self.selected_path()?;
        log::debug!("Unstaging {path}");
        tree.unstage(path)
    }

    /// Row of the cursor within [`ScreenModel::lines`]
    fn cursor_row(&self) -> Option<usize> {
        let mut remaining = self.cursor?;
        // legend
        let mut row = 1;
        for group in self.groups.iter().filter(|group| group.has_entries()) {
            // header
            row += 1;
            if remaining < group.len() {
                return Some(row + remaining);
            }
            row += group.len();
            remaining -= group.len();
        }
        None
    }

    /// Legend, then every non-empty group, with the cursor row highlighted
    pub fn lines(&self) -> Vec<RenderLine> {
        let mut lines = Vec::with_capacity(1 + self.total_entries + self.groups.len());
        lines.push(RenderLine::plain(self.legend.as_str()));
        for group in &self.groups {
            lines.extend(group.lines());
        }

        if let Some(row) = self.cursor_row() {
            lines[row].bg = self.cursor_color;
        }

        lines
    }
}
