//! Logger setup.
//!
//! The terminal UI owns stderr, so log records go to `git-iadd.log` in the cache
//! directory. The filter is read from `GIT_IADD_LOG` using `env_logger` syntax.

use crate::core::dirs::get_cache_directory;
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

pub const LOG_FILTER_ENV: &str = "GIT_IADD_LOG";
pub const LOG_FILE_NAME: &str = "git-iadd.log";

pub fn log_file_path() -> PathBuf {
    get_cache_directory().join(LOG_FILE_NAME)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger. Logging is switched off when the log file cannot be opened.
pub fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_FILTER_ENV, "warn"));

    match open_log_file(&log_file_path()) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    // A logger may already be installed (tests); keep it
    let _ = builder.try_init();
}
