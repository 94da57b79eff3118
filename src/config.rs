//! Configuration for category logging, read from the environment.

use std::env;

use crate::{
    error::{Error, Result},
    level::LevelDirectives,
};

/// Environment variable holding level directives, e.g. `warn,net=debug`.
pub const LEVEL_ENV: &str = "CATLOG_LEVEL";
/// Environment variable switching the console subscriber on or off.
pub const CONSOLE_ENV: &str = "CATLOG_CONSOLE";

/// Settings applied by [`crate::logging::init_with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Levels for the default and for individual categories.
    pub directives: LevelDirectives,
    /// Install a `tracing` fmt subscriber and forward category logs to it.
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directives: LevelDirectives::new().with_default(crate::registry::DEFAULT_LEVEL),
            console: true,
        }
    }
}

impl LogConfig {
    /// Read `CATLOG_LEVEL` and `CATLOG_CONSOLE`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(LEVEL_ENV).ok(), env::var(CONSOLE_ENV).ok())
    }

    fn from_vars(level: Option<String>, console: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = level {
            config.directives = level.parse()?;
        }

        if let Some(console) = console {
            config.console = match console.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(Error::invalid_config(CONSOLE_ENV, console)),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_vars(None, None).unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.directives.default_level(), Some(LevelFilter::INFO));
        assert!(config.console);
    }

    #[test]
    fn test_reads_values() {
        let config = LogConfig::from_vars(
            Some("debug,storage=trace".to_string()),
            Some("off".to_string()),
        )
        .unwrap();

        assert_eq!(config.directives.default_level(), Some(LevelFilter::DEBUG));
        assert_eq!(config.directives.categories().len(), 1);
        assert!(!config.console);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            LogConfig::from_vars(None, Some("sometimes".to_string())),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            LogConfig::from_vars(Some("noisy".to_string()), None),
            Err(Error::InvalidLevel { .. })
        ));
    }
}
