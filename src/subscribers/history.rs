//! # History subscriber.
//!
//! [`HistoryBuffer`] keeps a bounded in-memory ring of recent records so they
//! can be inspected after the fact (the backing store of a log viewer). Once
//! the ring is full, the oldest record is evicted.

use std::collections::VecDeque;
use std::sync::RwLock;

use crate::records::LogRecord;
use crate::subscribers::Subscribe;

/// Bounded ring of recently broadcast records.
pub struct HistoryBuffer {
    entries: RwLock<VecDeque<LogRecord>>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Ring capacity used by [`HistoryBuffer::default`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Creates a ring holding at most `capacity` records (clamped to >= 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Returns the held records, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if the ring holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all held records.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Subscribe for HistoryBuffer {
    fn on_record(&self, record: &LogRecord) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(record.clone());
    }

    fn name(&self) -> &'static str {
        "history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageLog;
    use crate::records::Severity;
    use std::sync::Arc;

    #[test]
    fn test_keeps_arrival_order() {
        let buffer = HistoryBuffer::new(8);
        for i in 0..3 {
            buffer.on_record(&LogRecord::new(format!("m{i}"), "T", Severity::Info));
        }
        let held: Vec<String> = buffer
            .snapshot()
            .iter()
            .map(|r| r.message.to_string())
            .collect();
        assert_eq!(held, vec!["m0", "m1", "m2"]);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let buffer = HistoryBuffer::new(3);
        for i in 0..5 {
            buffer.on_record(&LogRecord::new(format!("m{i}"), "T", Severity::Info));
        }
        assert_eq!(buffer.len(), 3);
        let held: Vec<String> = buffer
            .snapshot()
            .iter()
            .map(|r| r.message.to_string())
            .collect();
        assert_eq!(held, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let buffer = HistoryBuffer::new(0);
        buffer.on_record(&LogRecord::new("only", "T", Severity::Info));
        buffer.on_record(&LogRecord::new("kept", "T", Severity::Info));
        assert_eq!(buffer.len(), 1);
        assert_eq!(&*buffer.snapshot()[0].message, "kept");
    }

    #[test]
    fn test_clear_empties_the_ring() {
        let buffer = HistoryBuffer::new(4);
        buffer.on_record(&LogRecord::new("m", "T", Severity::Info));
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_collects_from_a_broadcaster() {
        let log = MessageLog::builder().without_trace().build();
        let history = Arc::new(HistoryBuffer::default());
        let _s = log.subscribe(history.clone());

        log.log_message("disk full", "Storage", Severity::Warning);
        log.log_message("ok", "Net", Severity::Info);

        let held = history.snapshot();
        assert_eq!(held.len(), 2);
        assert_eq!(&*held[0].tag, "Storage");
        assert_eq!(held[0].level, Severity::Warning);
        assert_eq!(&*held[1].message, "ok");
    }
}
