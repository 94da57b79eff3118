//! Broadcast sink - publishes category log entries to any number of subscribers.

use tokio::sync::broadcast;

use super::{
    entry::{LogEntry, Record},
    sink::Sink,
};

/// Default capacity for the broadcast channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

/// Sink that copies every record into a [`LogEntry`] and sends it on a
/// broadcast channel.
///
/// Useful for streaming logs to a UI or for asserting on log output in tests.
/// Records logged while nobody is subscribed are dropped.
pub struct BroadcastSink {
    sender: broadcast::Sender<LogEntry>,
}

impl BroadcastSink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _rx) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to entries logged from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for BroadcastSink {
    fn log(&self, record: &Record<'_>) {
        if self.sender.receiver_count() == 0 {
            return;
        }
        // Only fails when every receiver has been dropped in the meantime.
        let _ = self.sender.send(LogEntry::from(record));
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;
    use tracing::Level;

    use super::*;

    #[test]
    fn test_subscribers_receive_entries() {
        let sink = BroadcastSink::new();
        let mut rx1 = sink.subscribe();
        let mut rx2 = sink.subscribe();
        assert_eq!(sink.receiver_count(), 2);

        sink.log(&Record::new("storage", Level::DEBUG, format_args!("wrote {} bytes", 512)));

        for rx in [&mut rx1, &mut rx2] {
            let entry = rx.try_recv().unwrap();
            assert_eq!(entry.category, "storage");
            assert_eq!(entry.level, Level::DEBUG);
            assert_eq!(entry.message, "wrote 512 bytes");
        }
    }

    #[test]
    fn test_no_subscribers_is_noop() {
        let sink = BroadcastSink::with_capacity(0);
        sink.log(&Record::new("storage", Level::INFO, format_args!("dropped")));

        let mut rx = sink.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
