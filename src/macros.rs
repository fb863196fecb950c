//! Logging macros that capture the call site.
//!
//! Each macro formats its arguments like `format!` and records the name of
//! the enclosing function and the line of the invocation.
//!
//! # Examples
//!
//! ```
//! use multi_handler_logging::prelude::*;
//! use multi_handler_logging::{critical, debug};
//!
//! let ctx = LoggingContext::default();
//! let logger = ctx.get_logger("CONSOLE");
//! logger.set_min_level(LogLevel::Debug);
//!
//! critical!(logger, "Odd and Even numbers below 20.");
//! debug!(logger, "{} is an odd number.", 3);
//! ```

/// Name of the function the macro is expanded in.
///
/// ```
/// fn multi_handlers() -> &'static str {
///     multi_handler_logging::function_name!()
/// }
/// assert_eq!(multi_handlers(), "multi_handlers");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::enclosing_function_name(type_name_of(f))
    }};
}

/// Log a message at an explicit level.
///
/// ```
/// # use multi_handler_logging::prelude::*;
/// # let ctx = LoggingContext::default();
/// # let logger = ctx.get_logger("ROOT");
/// use multi_handler_logging::log;
/// log!(logger, LogLevel::Critical, "End of loop.");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::function_name!(), line!(), format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// ```
/// # use multi_handler_logging::prelude::*;
/// # let ctx = LoggingContext::default();
/// # let logger = ctx.get_logger("ROOT");
/// use multi_handler_logging::critical;
/// critical!(logger, "Disk {} is full", "/dev/sda1");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
