//! Explicit logging context
//!
//! A [`LoggingContext`] owns the shared formatter and a name-keyed registry of
//! loggers. It is built once at startup and passed by reference to whatever
//! needs to emit records.

use super::{error::Result, formatter::Formatter, logger::Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct LoggingContext {
    formatter: Arc<Formatter>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggingContext {
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter: formatter.shared(),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Formatter every appender built for this context should use
    pub fn formatter(&self) -> Arc<Formatter> {
        Arc::clone(&self.formatter)
    }

    /// Return the logger registered under `name`, creating it on first use.
    ///
    /// Every call with the same name yields the same instance.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    /// Names of all registered loggers, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Flush every appender of every registered logger
    pub fn flush(&self) -> Result<()> {
        let loggers = self.loggers.read();
        for logger in loggers.values() {
            logger.flush()?;
        }
        Ok(())
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new(Formatter::default())
    }
}
