//! Level directives, e.g. `"warn,net=debug,storage=trace"`.

use std::{fmt, str::FromStr};

use tracing::level_filters::LevelFilter;

use crate::error::{Error, Result};

/// Parse a single level name. Accepts whatever `tracing` accepts
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`, case-insensitive).
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| Error::invalid_level(value.trim()))
}

/// A parsed set of level settings.
///
/// Comma-separated; a bare level sets every category and the default, and
/// `category=level` entries override single categories. When a bare level
/// appears more than once the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelDirectives {
    default: Option<LevelFilter>,
    categories: Vec<(String, LevelFilter)>,
}

impl LevelDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, level: LevelFilter) -> Self {
        self.default = Some(level);
        self
    }

    pub fn with_category(mut self, name: impl Into<String>, level: LevelFilter) -> Self {
        self.categories.push((name.into(), level));
        self
    }

    pub fn default_level(&self) -> Option<LevelFilter> {
        self.default
    }

    pub fn categories(&self) -> &[(String, LevelFilter)] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.categories.is_empty()
    }
}

impl FromStr for LevelDirectives {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut directives = LevelDirectives::new();

        for directive in s.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((name, level)) => {
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(Error::invalid_directive(directive, "empty category name"));
                    }
                    let level = parse_level(level)
                        .map_err(|_| Error::invalid_directive(directive, "unknown level"))?;
                    directives.categories.push((name.to_string(), level));
                }
                None => directives.default = Some(parse_level(directive)?),
            }
        }

        Ok(directives)
    }
}

impl fmt::Display for LevelDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(level) = self.default {
            parts.push(level.to_string().to_lowercase());
        }
        for (name, level) in &self.categories {
            parts.push(format!("{}={}", name, level.to_string().to_lowercase()));
        }
        write!(f, "{}", parts.join(","))
    }
}
