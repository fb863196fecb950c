//! # Multi-Handler Logging
//!
//! A small logging library and the demonstration built on it: several named
//! loggers routing records to console and file appenders that share one
//! formatter.
//!
//! ## Features
//!
//! - **Explicit context**: loggers come from a [`LoggingContext`] built at
//!   startup, not from global state
//! - **Shared appenders**: one sink can serve several loggers
//! - **Call-site capture**: macros record the calling function and line
//! - **Template formatting**: one template renders every line identically

pub mod appenders;
pub mod core;
pub mod demo;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        shared, Appender, Formatter, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics,
        LoggingContext, Result, SharedAppender,
    };
    pub use crate::demo::{Demo, DemoConfig};
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    shared, Appender, Formatter, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics,
    LoggingContext, Result, SharedAppender,
};
pub use demo::{multi_handlers, Demo, DemoConfig};
