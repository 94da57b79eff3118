//! Sinks and subscriber setup for category logging.
//!
//! Every [`Logger`](crate::Logger) of a registry writes into that registry's
//! single [`DistSink`], which fans records out to whatever sub-sinks are
//! attached:
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐
//! │ Logger "net" │  │Logger "disk" │   ... one per category
//! └──────┬───────┘  └──────┬───────┘
//!        └────────┬────────┘
//!                 ▼
//!        ┌────────────────┐
//!        │    DistSink    │   registry-owned, lives for the process
//!        └───┬────────┬───┘
//!            ▼        ▼
//!   ┌─────────────┐ ┌───────────────┐
//!   │ TracingSink │ │ BroadcastSink │   ... any `Sink`
//!   └─────────────┘ └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // Install a fmt subscriber and apply CATLOG_LEVEL / CATLOG_CONSOLE.
//! catlog::logging::init()?;
//!
//! // Or stream entries somewhere else.
//! let broadcast = Arc::new(BroadcastSink::new());
//! catlog::global_registry().master_sink().add_sink(broadcast.clone());
//! let mut rx = broadcast.subscribe();
//! ```

pub mod broadcast;
#[cfg(test)]
pub(crate) mod capture;
pub mod entry;
pub mod forward;
pub mod sink;

pub use broadcast::BroadcastSink;
pub use entry::{LogEntry, Record};
pub use forward::TracingSink;
pub use sink::{DistSink, Sink};

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::LogConfig,
    error::{Error, Result},
    registry::{global_registry, CategoryRegistry},
};

/// `EnvFilter` used when `RUST_LOG` is unset. Category loggers do their own
/// level filtering, so their forwarded events are let through.
const DEFAULT_ENV_FILTER: &str = "info,catlog_category=trace";

/// Initialize category logging from the environment.
///
/// Call this once at application startup.
pub fn init() -> Result<()> {
    init_with_config(&LogConfig::from_env()?)
}

/// Initialize the global registry with the given configuration.
pub fn init_with_config(config: &LogConfig) -> Result<()> {
    init_with_registry(config, global_registry())
}

/// Initialize logging for a custom registry.
///
/// With `console` enabled this installs the global `tracing` subscriber, so it
/// can only succeed once per process.
pub fn init_with_registry(config: &LogConfig, registry: Arc<CategoryRegistry>) -> Result<()> {
    if config.console {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_ENV_FILTER));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .map_err(Error::subscriber_init)?;

        registry.master_sink().add_sink(Arc::new(TracingSink::new()));
    }

    registry.apply_directives(&config.directives);

    tracing::debug!(
        directives = %config.directives,
        console = config.console,
        "category logging initialized"
    );
    Ok(())
}

/// Flush every sink attached to the global registry. Call before exiting.
pub fn shutdown() {
    global_registry().flush();
}
