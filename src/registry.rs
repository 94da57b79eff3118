//! Category registry - the process-wide map from category name to logger.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

use crate::{
    level::LevelDirectives,
    logger::Logger,
    logging::sink::{DistSink, Sink},
};

/// Level given to new category loggers until changed.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Everything guarded by the registry lock.
struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    default_level: LevelFilter,
}

impl RegistryState {
    fn find_or_make(&mut self, name: &str, sink: &Arc<DistSink>) -> Arc<Logger> {
        if let Some(logger) = self.loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(name, Arc::clone(sink), self.default_level));
        self.loggers.insert(name.to_string(), Arc::clone(&logger));
        tracing::trace!(category = name, level = %self.default_level, "created category logger");
        logger
    }
}

/// Registry of category loggers sharing one fan-out sink.
///
/// There is at most one [`Logger`] per name. The name map and the default level
/// for new loggers sit behind a single mutex, so creation, enumeration and
/// default-level changes are totally ordered.
///
/// Most code uses the global instance through [`CategoryLogger`](crate::CategoryLogger)
/// and the free functions at the crate root; separate registries are handy in
/// tests or when embedding several independent logging setups.
pub struct CategoryRegistry {
    state: Mutex<RegistryState>,
    master_sink: Arc<DistSink>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::with_default_level(DEFAULT_LEVEL)
    }

    pub fn with_default_level(level: LevelFilter) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                loggers: HashMap::new(),
                default_level: level,
            }),
            master_sink: Arc::new(DistSink::new()),
        }
    }

    /// The sink every logger of this registry writes into. Add sub-sinks here.
    pub fn master_sink(&self) -> &Arc<DistSink> {
        &self.master_sink
    }

    /// Find the logger for `name`, creating it at the current default level if
    /// it does not exist yet.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        self.lock().find_or_make(name, &self.master_sink)
    }

    /// Look up an existing logger without creating one.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().loggers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().loggers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().loggers.is_empty()
    }

    /// Names of all registered categories, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.lock().loggers.keys().cloned().collect()
    }

    /// Call `visit` on every registered logger while holding the registry lock.
    ///
    /// No category can be created until this returns. Resolving a new
    /// [`CategoryLogger`](crate::CategoryLogger) of this registry from inside
    /// `visit` deadlocks.
    pub fn for_each_cat_logger<F>(&self, visit: F)
    where
        F: FnMut(&str, &Logger),
    {
        self.for_each_cat_logger_then(visit, |_| {});
    }

    /// Like [`for_each_cat_logger`](Self::for_each_cat_logger), then run
    /// `and_then` before releasing the lock.
    ///
    /// `and_then` gets access to the default level, so "update every logger"
    /// and "update the default for future loggers" happen atomically.
    pub fn for_each_cat_logger_then<F, G>(&self, mut visit: F, and_then: G)
    where
        F: FnMut(&str, &Logger),
        G: FnOnce(&mut DefaultLevel<'_>),
    {
        let mut state = self.lock();
        let RegistryState {
            loggers,
            default_level,
        } = &mut *state;

        for (name, logger) in loggers.iter() {
            visit(name, logger);
        }
        and_then(&mut DefaultLevel {
            level: default_level,
        });
    }

    /// Level that loggers created from now on start with.
    pub fn default_level(&self) -> LevelFilter {
        self.lock().default_level
    }

    /// Change the level for loggers created afterwards. Existing loggers keep
    /// their level; use [`reset_level`](Self::reset_level) to change both.
    pub fn set_default_level(&self, level: LevelFilter) {
        self.lock().default_level = level;
    }

    /// Set every existing logger and the default to `level`.
    pub fn reset_level(&self, level: LevelFilter) {
        self.for_each_cat_logger_then(
            |_, logger| logger.set_level(level),
            |default| default.set(level),
        );
    }

    /// Set the level of one category, creating it if needed.
    pub fn set_level(&self, name: &str, level: LevelFilter) {
        self.get_or_create(name).set_level(level);
    }

    /// Level of one category, creating it if needed.
    pub fn get_level(&self, name: &str) -> LevelFilter {
        self.get_or_create(name).level()
    }

    /// Apply parsed level directives under a single lock: the bare level (if
    /// any) resets everything, then each per-category override is applied.
    pub fn apply_directives(&self, directives: &LevelDirectives) {
        let mut state = self.lock();
        if let Some(level) = directives.default_level() {
            for logger in state.loggers.values() {
                logger.set_level(level);
            }
            state.default_level = level;
        }
        for (name, level) in directives.categories() {
            state.find_or_make(name, &self.master_sink).set_level(*level);
        }
    }

    /// Flush every sink attached to this registry.
    pub fn flush(&self) {
        self.master_sink.flush();
    }

    // A panicking visitor poisons the mutex; every mutation is a single insert
    // or store, so the state is still consistent.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("CategoryRegistry")
            .field("categories", &state.loggers.len())
            .field("default_level", &state.default_level)
            .field("sinks", &self.master_sink.len())
            .finish()
    }
}

/// Access to a registry's default level while its lock is held.
///
/// Only handed out inside [`CategoryRegistry::for_each_cat_logger_then`].
pub struct DefaultLevel<'a> {
    level: &'a mut LevelFilter,
}

impl DefaultLevel<'_> {
    pub fn get(&self) -> LevelFilter {
        *self.level
    }

    pub fn set(&mut self, level: LevelFilter) {
        *self.level = level;
    }
}

/// Global category registry instance.
static GLOBAL_REGISTRY: Lazy<Arc<CategoryRegistry>> =
    Lazy::new(|| Arc::new(CategoryRegistry::new()));

/// Get the global category registry.
pub fn global_registry() -> Arc<CategoryRegistry> {
    GLOBAL_REGISTRY.clone()
}

pub(crate) fn global() -> &'static CategoryRegistry {
    &GLOBAL_REGISTRY
}
