//! Helpers shared by the integration tests.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use catlog::{BroadcastSink, CategoryRegistry, LogEntry};
use tokio::sync::broadcast::Receiver;

static ID: AtomicU32 = AtomicU32::new(0);

/// A category name no other test in this binary uses.
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, ID.fetch_add(1, Ordering::Relaxed))
}

/// A private registry with a broadcast sink attached, plus a subscription to it.
#[allow(dead_code)]
pub fn capturing_registry() -> (Arc<CategoryRegistry>, Receiver<LogEntry>) {
    let registry = Arc::new(CategoryRegistry::new());
    let broadcast = Arc::new(BroadcastSink::new());
    registry.master_sink().add_sink(broadcast.clone());
    let rx = broadcast.subscribe();
    (registry, rx)
}

/// Everything currently buffered on `rx`.
#[allow(dead_code)]
pub fn drain(rx: &mut Receiver<LogEntry>) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    while let Ok(entry) = rx.try_recv() {
        entries.push(entry);
    }
    entries
}
