//! Display settings for the status screen.
//!
//! [`ScreenConfig`] is read from `config.json` in the git-iadd config directory.
//! Every field is optional in the file; a missing file means all defaults.

use crate::core::dirs::get_config_directory;
use crate::core::error::{IaddError, Result};
use crate::core::line::LineColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScreenConfig {
    pub staged_color: LineColor,
    pub unstaged_color: LineColor,
    pub untracked_color: LineColor,
    pub cursor_color: LineColor,
    pub legend: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            staged_color: LineColor::Green,
            unstaged_color: LineColor::Red,
            untracked_color: LineColor::Red,
            cursor_color: LineColor::Yellow,
            legend: "a: add, r: unstage, q: quit".to_string(),
        }
    }
}

impl ScreenConfig {
    pub fn config_path() -> PathBuf {
        get_config_directory().join(CONFIG_FILE_NAME)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| IaddError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Emphasis color of each group, in display order
    pub fn group_colors(&self) -> [LineColor; 3] {
        [self.staged_color, self.unstaged_color, self.untracked_color]
    }
}
