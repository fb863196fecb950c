//! Log storage: the log directory and the per-run file name

use crate::core::{LoggerError, Result};
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure `dir` exists. An existing directory is left untouched.
pub fn ensure_log_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        LoggerError::io_operation("creating log directory", dir.display().to_string(), e)
    })
}

/// Path of the log file for a run started at `started_at`.
///
/// `pattern` is a strftime pattern; the default yields
/// `multi_handlers_14:03:09_19-10-2026.log`.
pub fn log_file_path(dir: &Path, pattern: &str, started_at: &DateTime<Local>) -> PathBuf {
    let mut name = String::new();
    let _ = write!(name, "{}", started_at.format(pattern));
    dir.join(name)
}
