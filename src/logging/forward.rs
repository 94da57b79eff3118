//! Sink that hands category records over to the `tracing` ecosystem.

use tracing::Level;

use super::{entry::Record, sink::Sink};

/// Target used for every forwarded event. Filter on it with `EnvFilter`
/// directives such as `catlog_category=debug`. Not a prefix of the crate's
/// module paths, so enabling it leaves catlog's own diagnostics alone.
pub const TARGET: &str = "catlog_category";

/// Forwards each record as a `tracing` event with a `category` field.
///
/// Formatting and output destinations are whatever subscriber is installed;
/// [`crate::logging::init`] installs a `fmt` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn log(&self, record: &Record<'_>) {
        let category = record.category();
        let args = record.args();
        // tracing needs the level at compile time.
        let level = record.level();
        if level == Level::ERROR {
            tracing::error!(target: TARGET, category, "{}", args);
        } else if level == Level::WARN {
            tracing::warn!(target: TARGET, category, "{}", args);
        } else if level == Level::INFO {
            tracing::info!(target: TARGET, category, "{}", args);
        } else if level == Level::DEBUG {
            tracing::debug!(target: TARGET, category, "{}", args);
        } else {
            tracing::trace!(target: TARGET, category, "{}", args);
        }
    }
}
