//! The multi-handler demonstration
//!
//! Three loggers share one formatter:
//!
//! - `CONSOLE` writes to standard output
//! - `FILE` writes to a per-run file under `logs/`
//! - `ROOT` writes to both, but only at `CRITICAL`
//!
//! [`multi_handlers`] then counts below 20, sending odd numbers to the
//! console and even numbers to the file, framed by two critical markers.

pub mod config;
pub mod storage;

pub use config::DemoConfig;
pub use storage::{ensure_log_dir, log_file_path};

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::core::{shared, LoggingContext, Result};
use crate::{critical, debug};
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONSOLE_LOGGER: &str = "CONSOLE";
pub const FILE_LOGGER: &str = "FILE";
pub const ROOT_LOGGER: &str = "ROOT";

/// A configured logging context plus the file its `FILE` sink writes to.
pub struct Demo {
    context: LoggingContext,
    log_file: PathBuf,
}

impl Demo {
    /// Configure the loggers against stdout, naming the file after the current time
    pub fn setup(config: &DemoConfig) -> Result<Self> {
        Self::setup_with(config, Local::now(), Box::new(std::io::stdout()))
    }

    /// Configure the loggers with an explicit start time and console stream
    pub fn setup_with(
        config: &DemoConfig,
        started_at: DateTime<Local>,
        console: Box<dyn Write + Send>,
    ) -> Result<Self> {
        config.validate()?;
        ensure_log_dir(&config.log_dir)?;

        let context = LoggingContext::new(config.formatter()?);
        let log_file = log_file_path(&config.log_dir, &config.file_name_pattern, &started_at);

        let file_sink = shared(FileAppender::new(&log_file, context.formatter())?);
        let console_sink = shared(ConsoleAppender::with_writer(context.formatter(), console));

        let file_logger = context.get_logger(FILE_LOGGER);
        file_logger.set_min_level(config.file_level);
        file_logger.add_appender(Arc::clone(&file_sink));

        let console_logger = context.get_logger(CONSOLE_LOGGER);
        console_logger.set_min_level(config.console_level);
        console_logger.add_appender(Arc::clone(&console_sink));

        let root_logger = context.get_logger(ROOT_LOGGER);
        root_logger.set_min_level(config.root_level);
        root_logger.add_appender(file_sink);
        root_logger.add_appender(console_sink);

        Ok(Self { context, log_file })
    }

    pub fn context(&self) -> &LoggingContext {
        &self.context
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn run(&self) {
        multi_handlers(&self.context);
    }

    /// Flush every sink and release the open file
    pub fn shutdown(self) -> Result<()> {
        self.context.flush()
    }
}

/// Odd numbers are printed on the console and even numbers are stored in the
/// log file; the opening and closing markers go to both.
pub fn multi_handlers(ctx: &LoggingContext) {
    let root = ctx.get_logger(ROOT_LOGGER);
    let console = ctx.get_logger(CONSOLE_LOGGER);
    let file = ctx.get_logger(FILE_LOGGER);

    critical!(root, "Odd and Even numbers below 20.");
    for num in 0..20 {
        if num % 2 == 1 {
            debug!(console, "{} is an odd number.", num);
        } else {
            debug!(file, "{} is an even number.", num);
        }
    }
    critical!(root, "End of loop.");
}
