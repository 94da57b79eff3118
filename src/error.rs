//! Error types for the fallible edges of catlog (configuration and subscriber setup).
//!
//! Resolving and enumerating category loggers never fails; only parsing level
//! directives, reading configuration and installing the global subscriber do.

use thiserror::Error;

/// Errors raised while configuring category logging.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid log level `{value}`")]
    InvalidLevel { value: String },

    #[error("invalid level directive `{directive}`: {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("invalid value `{value}` for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("failed to install tracing subscriber: {source}")]
    SubscriberInit {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            value: value.into(),
        }
    }

    pub fn invalid_directive(directive: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDirective {
            directive: directive.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn subscriber_init(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SubscriberInit {
            source: Box::new(source),
        }
    }
}
