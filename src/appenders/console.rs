//! Console appender implementation

use crate::core::{Appender, Formatter, LogEntry, LogLevel, Result};
use std::io::Write;
use std::sync::Arc;

/// Writes each record to standard output as soon as it arrives.
///
/// The output stream can be swapped with [`ConsoleAppender::with_writer`],
/// which is how tests capture what would have reached the terminal.
pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    formatter: Arc<Formatter>,
    min_level: LogLevel,
}

impl ConsoleAppender {
    pub fn new(formatter: Arc<Formatter>) -> Self {
        Self::with_writer(formatter, Box::new(std::io::stdout()))
    }

    pub fn with_writer(formatter: Arc<Formatter>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer,
            formatter,
            min_level: LogLevel::Debug,
        }
    }

    /// Set the minimum level this appender writes
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.formatter.format(entry);
        output.push('\n');

        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
