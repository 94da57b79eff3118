//! Named, lazily-resolved category loggers.
//!
//! A [`CategoryLogger`] is declared with just a name, typically as a `static`,
//! and resolves to a shared [`Logger`] the first time it is used. All loggers
//! with the same name share one instance, each has its own level, and all of
//! them write into the registry's single fan-out sink (see [`logging`]).
//!
//! ```ignore
//! use catlog::{CategoryLogger, LevelFilter};
//!
//! static NET: CategoryLogger = CategoryLogger::new("network");
//! static DISK: CategoryLogger = CategoryLogger::new("storage");
//!
//! fn main() -> catlog::Result<()> {
//!     catlog::logging::init()?;
//!
//!     catlog::info!(NET, "listening on {}", 8080);
//!     DISK.set_level(LevelFilter::DEBUG);
//!
//!     // Everything, including categories created later, at warn.
//!     catlog::reset_level(LevelFilter::WARN);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod level;
pub mod logger;
pub mod logging;
mod macros;
pub mod registry;

pub use config::LogConfig;
pub use error::{Error, Result};
pub use handle::{cat, CategoryLogger};
pub use level::{parse_level, LevelDirectives};
pub use logger::Logger;
pub use logging::{BroadcastSink, DistSink, LogEntry, Record, Sink, TracingSink};
pub use registry::{global_registry, CategoryRegistry, DefaultLevel};

pub use tracing::{level_filters::LevelFilter, Level};

/// Run `visit` on every logger of the global registry while holding its lock.
/// There is no particular order.
pub fn for_each_cat_logger<F>(visit: F)
where
    F: FnMut(&str, &Logger),
{
    registry::global().for_each_cat_logger(visit);
}

/// Like [`for_each_cat_logger`], then run `and_then` before the lock is
/// released. New categories cannot be created in between.
pub fn for_each_cat_logger_then<F, G>(visit: F, and_then: G)
where
    F: FnMut(&str, &Logger),
    G: FnOnce(&mut DefaultLevel<'_>),
{
    registry::global().for_each_cat_logger_then(visit, and_then);
}

/// Level new categories of the global registry start at.
pub fn default_level() -> LevelFilter {
    registry::global().default_level()
}

/// Change the level new categories start at; existing ones are unaffected.
pub fn set_default_level(level: LevelFilter) {
    registry::global().set_default_level(level);
}

/// Set every category, and the default for future ones, to `level`.
pub fn reset_level(level: LevelFilter) {
    registry::global().reset_level(level);
}

/// Set the level of one category, creating it if it does not exist yet.
pub fn set_level(category: &str, level: LevelFilter) {
    registry::global().set_level(category, level);
}

/// Level of one category, creating it if it does not exist yet.
pub fn get_level(category: &str) -> LevelFilter {
    registry::global().get_level(category)
}

/// Apply level directives to the global registry under a single lock.
pub fn apply_directives(directives: &LevelDirectives) {
    registry::global().apply_directives(directives);
}
