//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Function name recorded when the call site is not known
pub const UNKNOWN_FUNCTION: &str = "(unknown function)";

/// A single log record as it travels from a logger to its appenders.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Name of the logger that emitted the record
    pub logger: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub function: String,
    pub line: u32,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always renders as exactly one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, logger: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self {
            level,
            logger: logger.into(),
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Local::now(),
            function: UNKNOWN_FUNCTION.to_string(),
            line: 0,
        }
    }

    pub fn with_location(mut self, function: &str, line: u32) -> Self {
        self.function = function.to_string();
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Reduce a `std::any::type_name` path of a nested helper fn to the name of
/// the enclosing function, e.g. `app::demo::run::f` becomes `run`.
///
/// Closure frames are skipped so a call inside `|| { .. }` still reports the
/// function that owns the closure.
pub fn enclosing_function_name(type_path: &str) -> &str {
    let mut path = type_path.strip_suffix("::f").unwrap_or(type_path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
