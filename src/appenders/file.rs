//! File appender implementation

use crate::core::{Appender, Formatter, LogEntry, LogLevel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends records to a file, opened in create/append mode.
///
/// Every record is flushed as soon as it is written, and any remaining
/// buffered bytes are flushed when the appender is dropped.
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    formatter: Arc<Formatter>,
    min_level: LogLevel,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>, formatter: Arc<Formatter>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            formatter,
            min_level: LogLevel::Debug,
        })
    }

    /// Set the minimum level this appender writes
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            LoggerError::file_appender(self.path.display().to_string(), "writer not initialized")
        })?;

        let mut output = self.formatter.format(entry);
        output.push('\n');

        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_written_immediately() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("run.log");
        let mut appender =
            FileAppender::new(&path, Formatter::default().shared()).expect("open appender");
        assert_eq!(appender.path(), path.as_path());

        let entry = LogEntry::new(LogLevel::Debug, "FILE", "0 is an even number.");
        appender.append(&entry).expect("append");

        // Visible before the appender is dropped
        let content = fs::read_to_string(&path).expect("read log");
        assert!(content.ends_with(" - 0 is an even number.\n"));
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("run.log");
        fs::write(&path, "existing line\n").expect("seed file");

        {
            let mut appender =
                FileAppender::new(&path, Formatter::default().shared()).expect("open appender");
            appender
                .append(&LogEntry::new(LogLevel::Critical, "ROOT", "End of loop."))
                .expect("append");
        }

        let content = fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "existing line");
    }

    #[test]
    fn test_min_level_applies_through_logger() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("run.log");
        let appender = FileAppender::new(&path, Formatter::default().shared())
            .expect("open appender")
            .with_min_level(LogLevel::Critical);

        let logger = crate::core::Logger::new("ROOT");
        logger.set_min_level(LogLevel::Debug);
        logger.add_appender(crate::core::shared(appender));
        logger.debug("skipped");
        logger.critical("written");

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("[CRITICAL] - ROOT - "));
    }

    #[test]
    fn test_open_failure() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("run.log");
        let err = FileAppender::new(&path, Formatter::default().shared())
            .err()
            .expect("missing parent directory");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
