//! Demo configuration

use crate::core::{
    formatter::validate_strftime, Formatter, LogLevel, LoggerError, Result, DEFAULT_DATE_FORMAT,
    DEFAULT_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the demo writes its log file
pub const DEFAULT_LOG_DIR: &str = "logs";

/// strftime pattern of the per-run log file name
pub const DEFAULT_FILE_NAME_PATTERN: &str = "multi_handlers_%H:%M:%S_%d-%m-%Y.log";

/// Settings for one demo run.
///
/// The defaults reproduce the demonstration exactly; every field may be
/// omitted from a JSON document.
///
/// # Example
///
/// ```
/// use multi_handler_logging::DemoConfig;
///
/// let config = DemoConfig::from_json(r#"{ "log_dir": "/tmp/demo-logs" }"#).unwrap();
/// assert_eq!(config.log_dir.to_str(), Some("/tmp/demo-logs"));
/// assert_eq!(config.date_format, "%b-%d-%Y %H:%M:%S");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_dir: PathBuf,
    pub file_name_pattern: String,
    pub template: String,
    pub date_format: String,
    pub console_level: LogLevel,
    pub file_level: LogLevel,
    pub root_level: LogLevel,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_name_pattern: DEFAULT_FILE_NAME_PATTERN.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            console_level: LogLevel::Debug,
            file_level: LogLevel::Debug,
            root_level: LogLevel::Critical,
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading configuration", path.display().to_string(), e)
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_file_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_name_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_console_level(mut self, level: LogLevel) -> Self {
        self.console_level = level;
        self
    }

    #[must_use]
    pub fn with_file_level(mut self, level: LogLevel) -> Self {
        self.file_level = level;
        self
    }

    #[must_use]
    pub fn with_root_level(mut self, level: LogLevel) -> Self {
        self.root_level = level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_dir.as_os_str().is_empty() {
            return Err(LoggerError::config("DemoConfig", "log_dir must not be empty"));
        }
        if self.file_name_pattern.contains('/') || self.file_name_pattern.contains('\\') {
            return Err(LoggerError::config(
                "DemoConfig",
                "file_name_pattern must be a bare file name",
            ));
        }
        validate_strftime(&self.file_name_pattern)?;
        self.formatter()?;
        Ok(())
    }

    /// Build the formatter shared by every appender
    pub fn formatter(&self) -> Result<Formatter> {
        Formatter::new(self.template.as_str(), self.date_format.as_str())
    }
}
