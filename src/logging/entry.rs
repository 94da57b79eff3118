//! Log record types passed from category loggers to sinks.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::Level;

/// A single message as handed to a [`Sink`](super::sink::Sink).
///
/// Borrowed so that sinks which drop the message never pay for formatting.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    category: &'a str,
    level: Level,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    pub fn new(category: &'a str, level: Level, args: fmt::Arguments<'a>) -> Self {
        Self {
            category,
            level,
            args,
        }
    }

    pub fn category(&self) -> &'a str {
        self.category
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }
}

/// An owned copy of a [`Record`], stamped with the time it was logged.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When the message was logged.
    pub timestamp: DateTime<Utc>,
    /// Severity (ERROR, WARN, INFO, DEBUG, TRACE).
    pub level: Level,
    /// Category the message was logged under.
    pub category: String,
    /// The formatted message.
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Level, category: String, message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            category,
            message,
        }
    }
}

impl From<&Record<'_>> for LogEntry {
    fn from(record: &Record<'_>) -> Self {
        Self::new(
            record.level(),
            record.category().to_string(),
            record.args().to_string(),
        )
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.category,
            self.message
        )
    }
}
