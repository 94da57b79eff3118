//! Lazily-resolved category logger handles.

use std::{borrow::Cow, fmt, ops::Deref, sync::Arc};

use once_cell::sync::OnceCell;

use crate::{
    logger::Logger,
    registry::{self, CategoryRegistry},
};

/// Handle to a categorized logger.
///
/// Construction only stores the name, so handles can be `static` items declared
/// before logging is set up. The logger itself is looked up (or created) in the
/// registry on first use and cached in the handle; later uses do not lock.
///
/// ```ignore
/// use catlog::CategoryLogger;
///
/// static NET: CategoryLogger = CategoryLogger::new("network");
///
/// fn connect() {
///     catlog::info!(NET, "connecting to {}", "10.0.0.1");
///     NET.set_level(tracing::level_filters::LevelFilter::DEBUG);
/// }
/// ```
pub struct CategoryLogger {
    name: Cow<'static, str>,
    registry: Option<Arc<CategoryRegistry>>,
    logger: OnceCell<Arc<Logger>>,
}

impl CategoryLogger {
    /// Handle for a category of the global registry.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            registry: None,
            logger: OnceCell::new(),
        }
    }

    /// Handle for a category of the global registry with a runtime name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            registry: None,
            logger: OnceCell::new(),
        }
    }

    /// Handle that resolves against `registry` instead of the global one.
    pub fn in_registry(name: impl Into<Cow<'static, str>>, registry: Arc<CategoryRegistry>) -> Self {
        Self {
            name: name.into(),
            registry: Some(registry),
            logger: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared logger for this category, resolving it on first call.
    pub fn logger(&self) -> &Arc<Logger> {
        self.logger.get_or_init(|| self.registry().get_or_create(&self.name))
    }

    /// Whether the logger has been resolved yet.
    pub fn is_resolved(&self) -> bool {
        self.logger.get().is_some()
    }

    fn registry(&self) -> &CategoryRegistry {
        match &self.registry {
            Some(registry) => registry.as_ref(),
            None => registry::global(),
        }
    }
}

/// Shortcut for [`CategoryLogger::named`].
pub fn cat(name: impl Into<Cow<'static, str>>) -> CategoryLogger {
    CategoryLogger::named(name)
}

impl Deref for CategoryLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger()
    }
}

impl AsRef<Logger> for CategoryLogger {
    fn as_ref(&self) -> &Logger {
        self.logger()
    }
}

impl From<&CategoryLogger> for Arc<Logger> {
    fn from(handle: &CategoryLogger) -> Self {
        Arc::clone(handle.logger())
    }
}

impl Clone for CategoryLogger {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            registry: self.registry.clone(),
            logger: match self.logger.get() {
                Some(logger) => OnceCell::with_value(Arc::clone(logger)),
                None => OnceCell::new(),
            },
        }
    }
}

impl fmt::Debug for CategoryLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLogger")
            .field("name", &self.name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    static STATIC_HANDLE: CategoryLogger = CategoryLogger::new("handle-tests-static");

    #[test]
    fn test_construction_is_lazy() {
        let registry = Arc::new(CategoryRegistry::new());
        let handle = CategoryLogger::in_registry("net", registry.clone());

        assert!(!handle.is_resolved());
        assert!(registry.is_empty());

        assert_eq!(handle.name(), "net");
        assert_eq!(handle.logger().name(), "net");
        assert!(handle.is_resolved());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handles_share_logger() {
        let registry = Arc::new(CategoryRegistry::new());
        let h1 = CategoryLogger::in_registry("net", registry.clone());
        let h2 = CategoryLogger::in_registry(String::from("net"), registry.clone());

        assert!(Arc::ptr_eq(h1.logger(), h2.logger()));

        h1.set_level(LevelFilter::TRACE);
        assert_eq!(h2.level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_static_handle_resolves_in_global_registry() {
        let logger = STATIC_HANDLE.logger();
        let global = registry::global_registry();
        let found = global.get("handle-tests-static").unwrap();

        assert!(Arc::ptr_eq(logger, &found));
    }

    #[test]
    fn test_clone_keeps_resolution() {
        let registry = Arc::new(CategoryRegistry::new());
        let handle = CategoryLogger::in_registry("net", registry);
        let unresolved = handle.clone();
        assert!(!unresolved.is_resolved());

        handle.logger();
        let resolved = handle.clone();
        assert!(resolved.is_resolved());
        assert!(Arc::ptr_eq(resolved.logger(), unresolved.logger()));
    }

    #[test]
    fn test_cat_shortcut() {
        let handle = cat(format!("handle-tests-{}", "cat"));
        assert_eq!(handle.name(), "handle-tests-cat");
        assert!(!handle.is_resolved());
    }
}
