//! Named logger with a level threshold and an ordered set of appenders

use super::{
    appender::SharedAppender,
    error::Result,
    log_entry::{LogEntry, UNKNOWN_FUNCTION},
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::panic::Location;

/// A named emitter of log records.
///
/// Loggers are normally obtained from a
/// [`LoggingContext`](crate::core::LoggingContext), which hands out one shared
/// instance per name. Configuration methods take `&self` so a logger can be
/// configured through that shared handle.
pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<SharedAppender>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(LogLevel::default()),
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach an appender. Attaching the same appender twice delivers every
    /// record to it twice.
    pub fn add_appender(&self, appender: SharedAppender) {
        self.appenders.write().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    /// Log with an explicit call site
    pub fn log_at(&self, level: LogLevel, function: &str, line: u32, message: impl AsRef<str>) {
        if !self.is_enabled_for(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message).with_location(function, line);
        self.dispatch(&entry);
    }

    /// Log at `level`, recording the caller's line
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        let line = Location::caller().line();
        self.log_at(level, UNKNOWN_FUNCTION, line, message);
    }

    /// Deliver an entry to every appender in attachment order.
    ///
    /// A failing appender does not prevent the others from receiving the entry.
    fn dispatch(&self, entry: &LogEntry) {
        let appenders = self.appenders.read();
        let mut has_error = false;

        for (idx, appender) in appenders.iter().enumerate() {
            let mut appender = appender.lock();
            if entry.level < appender.min_level() {
                continue;
            }
            if let Err(e) = appender.append(entry) {
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) of logger '{}' failed: {}",
                    idx,
                    appender.name(),
                    self.name,
                    e
                );
                has_error = true;
            }
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_emitted();
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let appenders = self.appenders.read();
        for appender in appenders.iter() {
            appender.lock().flush()?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("appenders", &self.appender_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appender::{shared, Appender};
    use crate::core::error::LoggerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Collects entries in memory
    struct MemoryAppender {
        entries: Arc<Mutex<Vec<LogEntry>>>,
        min_level: LogLevel,
    }

    impl MemoryAppender {
        fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
            let entries = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    entries: Arc::clone(&entries),
                    min_level: LogLevel::Debug,
                },
                entries,
            )
        }
    }

    impl Appender for MemoryAppender {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.entries.lock().push(entry.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "memory"
        }

        fn min_level(&self) -> LogLevel {
            self.min_level
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_default_threshold_is_warning() {
        let logger = Logger::new("app");
        assert_eq!(logger.min_level(), LogLevel::Warning);
        assert!(!logger.is_enabled_for(LogLevel::Info));
        assert!(logger.is_enabled_for(LogLevel::Critical));
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let (appender, entries) = MemoryAppender::new();
        let logger = Logger::new("ROOT");
        logger.set_min_level(LogLevel::Critical);
        logger.add_appender(shared(appender));

        logger.debug("hidden");
        logger.error("hidden too");
        logger.critical("shown");

        let entries = entries.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(logger.metrics().filtered_count(), 2);
        assert_eq!(logger.metrics().emitted_count(), 1);
    }

    #[test]
    fn test_entry_carries_logger_name_and_location() {
        let (appender, entries) = MemoryAppender::new();
        let logger = Logger::new("CONSOLE");
        logger.set_min_level(LogLevel::Debug);
        logger.add_appender(shared(appender));

        logger.log_at(LogLevel::Debug, "multi_handlers", 12, "1 is an odd number.");
        logger.info("plain");

        let entries = entries.lock();
        assert_eq!(entries[0].logger, "CONSOLE");
        assert_eq!(entries[0].function, "multi_handlers");
        assert_eq!(entries[0].line, 12);
        assert_eq!(entries[1].function, UNKNOWN_FUNCTION);
        assert!(entries[1].line > 0);
    }

    #[test]
    fn test_appender_threshold() {
        let (mut appender, entries) = MemoryAppender::new();
        appender.min_level = LogLevel::Error;
        let logger = Logger::new("app");
        logger.set_min_level(LogLevel::Debug);
        logger.add_appender(shared(appender));

        logger.warning("skipped by appender");
        logger.error("kept");

        assert_eq!(entries.lock().len(), 1);
    }

    #[test]
    fn test_duplicate_attachment_duplicates_output() {
        let (appender, entries) = MemoryAppender::new();
        let appender = shared(appender);
        let logger = Logger::new("FILE");
        logger.set_min_level(LogLevel::Debug);
        logger.add_appender(Arc::clone(&appender));
        logger.add_appender(appender);

        logger.debug("twice");

        assert_eq!(logger.appender_count(), 2);
        assert_eq!(entries.lock().len(), 2);
    }

    #[test]
    fn test_failing_appender_does_not_block_others() {
        let (appender, entries) = MemoryAppender::new();
        let logger = Logger::new("app");
        logger.add_appender(shared(FailingAppender));
        logger.add_appender(shared(appender));

        logger.critical("still delivered");

        assert_eq!(entries.lock().len(), 1);
        assert_eq!(logger.metrics().failed_count(), 1);
        assert_eq!(logger.metrics().emitted_count(), 0);
    }
}
