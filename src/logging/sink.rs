//! Sink trait and the process-wide fan-out sink every category logger writes into.

use std::sync::{Arc, PoisonError, RwLock};

use super::entry::Record;

/// A destination for category log records.
///
/// Sinks are shared between every logger of a registry and called from many
/// threads at once, so implementations must synchronize internally.
pub trait Sink: Send + Sync {
    fn log(&self, record: &Record<'_>);

    fn flush(&self) {}
}

/// Fan-out sink that forwards each record to all of its sub-sinks.
///
/// Each registry owns exactly one of these for its whole lifetime; sub-sinks are
/// added and removed while loggers keep pointing at the same `DistSink`.
#[derive(Default)]
pub struct DistSink {
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl DistSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        self.write().push(sink);
    }

    /// Remove a previously added sink. Returns false if it was not attached.
    pub fn remove_sink(&self, sink: &Arc<dyn Sink>) -> bool {
        let mut sinks = self.write();
        let before = sinks.len();
        sinks.retain(|s| !same_sink(s, sink));
        sinks.len() != before
    }

    /// Replace all sub-sinks at once.
    pub fn set_sinks(&self, sinks: Vec<Arc<dyn Sink>>) {
        *self.write() = sinks;
    }

    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<dyn Sink>>> {
        self.sinks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn Sink>>> {
        self.sinks.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for DistSink {
    fn log(&self, record: &Record<'_>) {
        for sink in self.read().iter() {
            sink.log(record);
        }
    }

    fn flush(&self) {
        for sink in self.read().iter() {
            sink.flush();
        }
    }
}

// Compare data pointers only; vtable pointers for the same type may differ.
fn same_sink(a: &Arc<dyn Sink>, b: &Arc<dyn Sink>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
