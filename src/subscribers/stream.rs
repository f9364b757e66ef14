//! # Async record stream.
//!
//! [`RecordStream`] relays broadcast records into a [`tokio::sync::broadcast`]
//! channel so asynchronous consumers can observe the log without slowing the
//! logging thread.
//!
//! ## Rules
//! - **Non-blocking relay**: the subscriber callback is a fire-and-forget
//!   `send`; the synchronous delivery contract of the broadcaster holds.
//! - **Bounded**: one ring buffer of `capacity` records is shared by all
//!   receivers.
//! - **No persistence**: with no active receiver a relayed record is dropped.
//!
//! ## Lag semantics
//! A receiver that falls more than `capacity` records behind observes
//! `RecvError::Lagged(n)` and resumes at the oldest retained record; the `n`
//! skipped records are gone for that receiver only.

use tokio::sync::broadcast;

use crate::records::LogRecord;
use crate::subscribers::Subscribe;

/// Relay from the synchronous broadcast into an async channel.
///
/// Cheap to clone; clones share the same channel. Register one clone with
/// the broadcaster and keep another to create receivers from.
#[derive(Clone)]
pub struct RecordStream {
    tx: broadcast::Sender<LogRecord>,
}

impl RecordStream {
    /// Creates a stream whose ring buffer holds `capacity` records
    /// (clamped to >= 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Creates a receiver observing records relayed after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LogRecord> {
        self.tx.subscribe()
    }
}

impl Subscribe for RecordStream {
    fn on_record(&self, record: &LogRecord) {
        let _ = self.tx.send(record.clone());
    }

    fn name(&self) -> &'static str {
        "record-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageLog;
    use crate::records::Severity;
    use std::sync::Arc;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn test_relays_records_to_async_receiver() {
        let log = MessageLog::builder().without_trace().build();
        let stream = RecordStream::new(16);
        let _s = log.subscribe(Arc::new(stream.clone()));

        let mut rx = stream.subscribe();
        log.log_message("disk full", "Storage", Severity::Warning);

        let record = rx.recv().await.expect("relayed record");
        assert_eq!(&*record.message, "disk full");
        assert_eq!(&*record.tag, "Storage");
        assert_eq!(record.level, Severity::Warning);
    }

    #[tokio::test]
    async fn test_receiver_created_after_relay_sees_nothing() {
        let log = MessageLog::builder().without_trace().build();
        let stream = RecordStream::new(16);
        let _s = log.subscribe(Arc::new(stream.clone()));

        log.log_message("gone", "T", Severity::Info);

        let mut rx = stream.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_slow_receiver_observes_lag() {
        let log = MessageLog::builder().without_trace().build();
        let stream = RecordStream::new(2);
        let _s = log.subscribe(Arc::new(stream.clone()));

        let mut rx = stream.subscribe();
        for i in 0..4 {
            log.log_message(format!("m{i}"), "T", Severity::Info);
        }

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(2))));
        let record = rx.try_recv().expect("oldest retained record");
        assert_eq!(&*record.message, "m2");
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        // broadcast::channel panics on zero capacity; the clamp prevents it.
        let _stream = RecordStream::new(0);
    }
}
