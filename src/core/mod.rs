//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;

pub use appender::{shared, Appender, SharedAppender};
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, DEFAULT_DATE_FORMAT, DEFAULT_TEMPLATE};
pub use log_entry::{enclosing_function_name, LogEntry, UNKNOWN_FUNCTION};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use registry::LoggingContext;
