//! Record formatting
//!
//! A [`Formatter`] turns a [`LogEntry`] into one output line using a
//! template with named placeholders and a strftime date format.
//!
//! Supported placeholders:
//!
//! | Placeholder   | Value                              |
//! |---------------|------------------------------------|
//! | `{asctime}`   | record timestamp, rendered with the date format |
//! | `{levelname}` | `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL` |
//! | `{name}`      | logger name                        |
//! | `{funcName}`  | calling function                   |
//! | `{lineno}`    | calling line                       |
//! | `{message}`   | record message                     |
//!
//! Literal braces are written as `{{` and `}}`.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::sync::Arc;

/// Template shared by every appender of the demo
pub const DEFAULT_TEMPLATE: &str =
    "{asctime} - [{levelname}] - {name} - {funcName} - Line: {lineno} - {message}";

/// `Oct-19-2026 14:03:09`
pub const DEFAULT_DATE_FORMAT: &str = "%b-%d-%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AscTime,
    LevelName,
    Name,
    FuncName,
    LineNo,
    Message,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "asctime" => Some(Field::AscTime),
            "levelname" => Some(Field::LevelName),
            "name" => Some(Field::Name),
            "funcName" => Some(Field::FuncName),
            "lineno" => Some(Field::LineNo),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Compiled line template plus date format.
///
/// Cheap to share: appenders hold it behind an `Arc` so every sink renders
/// records identically.
#[derive(Debug, Clone)]
pub struct Formatter {
    template: String,
    date_format: String,
    segments: Vec<Segment>,
}

impl Formatter {
    /// Compile a template and validate the date format
    pub fn new(template: impl Into<String>, date_format: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let date_format = date_format.into();
        validate_strftime(&date_format)?;
        let segments = parse_template(&template)?;

        Ok(Self {
            template,
            date_format,
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Render a timestamp with this formatter's date format
    #[must_use]
    pub fn format_time(&self, timestamp: &DateTime<Local>) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", timestamp.format(&self.date_format));
        out
    }

    /// Render one record as a single line, without the trailing newline
    #[must_use]
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.template.len() + entry.message.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::AscTime) => {
                    let _ = write!(out, "{}", entry.timestamp.format(&self.date_format));
                }
                Segment::Field(Field::LevelName) => out.push_str(entry.level.to_str()),
                Segment::Field(Field::Name) => out.push_str(&entry.logger),
                Segment::Field(Field::FuncName) => out.push_str(&entry.function),
                Segment::Field(Field::LineNo) => {
                    let _ = write!(out, "{}", entry.line);
                }
                Segment::Field(Field::Message) => out.push_str(&entry.message),
            }
        }
        out
    }

    /// Wrap this formatter in an Arc for sharing across appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            segments: vec![
                Segment::Field(Field::AscTime),
                Segment::Literal(" - [".to_string()),
                Segment::Field(Field::LevelName),
                Segment::Literal("] - ".to_string()),
                Segment::Field(Field::Name),
                Segment::Literal(" - ".to_string()),
                Segment::Field(Field::FuncName),
                Segment::Literal(" - Line: ".to_string()),
                Segment::Field(Field::LineNo),
                Segment::Literal(" - ".to_string()),
                Segment::Field(Field::Message),
            ],
        }
    }
}

/// Reject strftime patterns chrono cannot render
pub fn validate_strftime(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(LoggerError::formatter(pattern, "empty date format"));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::formatter(
            pattern,
            "invalid strftime specifier",
        ));
    }
    Ok(())
}

fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(LoggerError::formatter(template, "unclosed '{'"));
                        }
                    }
                }
                let field = Field::parse(&name).ok_or_else(|| {
                    LoggerError::formatter(template, format!("unknown field '{}'", name))
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
            }
            '}' => {
                return Err(LoggerError::formatter(template, "unmatched '}'"));
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
