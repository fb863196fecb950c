//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry, log_level::LogLevel};
use parking_lot::Mutex;
use std::sync::Arc;

pub trait Appender: Send {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Records below this level are skipped by the appender
    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

/// An appender attached to one or more loggers.
///
/// Loggers hold the appender by reference, so the same underlying resource
/// (stdout, an open file) is written through a single handle.
pub type SharedAppender = Arc<Mutex<dyn Appender>>;

/// Wrap an appender so it can be attached to several loggers
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(appender))
}
