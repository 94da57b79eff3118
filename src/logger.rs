//! A named logger with its own runtime-adjustable level.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc,
    },
};

use tracing::{level_filters::LevelFilter, Level};

use crate::logging::{
    entry::Record,
    sink::{DistSink, Sink},
};

/// Level filters indexed by their atomic encoding.
const FILTERS: [LevelFilter; 6] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

fn encode(filter: LevelFilter) -> u8 {
    FILTERS
        .iter()
        .position(|f| *f == filter)
        .unwrap_or(3) as u8
}

fn decode(raw: u8) -> LevelFilter {
    FILTERS
        .get(raw as usize)
        .copied()
        .unwrap_or(LevelFilter::INFO)
}

/// The logger behind a category.
///
/// Created by a [`CategoryRegistry`](crate::CategoryRegistry) on first use of a
/// category name and shared (via `Arc`) by the registry and every handle that
/// resolved to it. Safe to use from any number of threads.
pub struct Logger {
    name: String,
    level: AtomicU8,
    sink: Arc<DistSink>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, sink: Arc<DistSink>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(encode(level)),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LevelFilter {
        decode(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LevelFilter) {
        self.level.store(encode(level), Ordering::Relaxed);
    }

    /// Whether a message at `level` would be passed on to the sink.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level()
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.sink.log(&Record::new(&self.name, level, args));
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::TRACE, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARN, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    pub fn flush(&self) {
        self.sink.flush();
    }

    /// The fan-out sink this logger writes into.
    pub fn sink(&self) -> &Arc<DistSink> {
        &self.sink
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::logging::broadcast::BroadcastSink;

    use super::*;

    fn logger_with_broadcast(level: LevelFilter) -> (Logger, Arc<BroadcastSink>) {
        let dist = Arc::new(DistSink::new());
        let broadcast = Arc::new(BroadcastSink::new());
        dist.add_sink(broadcast.clone());
        (Logger::new("net", dist, level), broadcast)
    }

    #[test]
    fn test_level_round_trips_every_filter() {
        let (logger, _) = logger_with_broadcast(LevelFilter::INFO);
        for filter in FILTERS {
            logger.set_level(filter);
            assert_eq!(logger.level(), filter);
        }
    }

    #[test]
    fn test_messages_below_level_are_suppressed() {
        let (logger, broadcast) = logger_with_broadcast(LevelFilter::INFO);
        let mut rx = broadcast.subscribe();

        logger.debug(format_args!("hidden"));
        logger.warn(format_args!("shown {}", 1));

        let entry = rx.try_recv().unwrap();
        assert_eq!(entry.message, "shown 1");
        assert_eq!(entry.category, "net");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_off_suppresses_everything() {
        let (logger, _) = logger_with_broadcast(LevelFilter::OFF);
        assert!(!logger.enabled(Level::ERROR));

        logger.set_level(LevelFilter::TRACE);
        assert!(logger.enabled(Level::TRACE));
    }
}
