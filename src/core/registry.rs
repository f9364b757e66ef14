//! # Subscriber registry - id-keyed listener list.
//!
//! The registry owns the set of registered subscribers behind a
//! `std::sync::RwLock`. Broadcast takes a snapshot under the read lock and
//! releases it before any callback runs, so callbacks may re-enter
//! `subscribe`/`unsubscribe` freely.
//!
//! ## Rules
//! - Ids are allocated from a process-wide counter and never reused.
//! - `remove` is idempotent: removing an unknown id is a no-op.
//! - Lock poisoning is ignored (`PoisonError::into_inner`): no callback
//!   ever runs under the lock, so the list cannot be seen mid-mutation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::subscribers::Subscribe;

/// Process-wide registration id sequence.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// One registration.
struct Entry {
    id: u64,
    subscriber: Arc<dyn Subscribe>,
}

/// Thread-safe, id-keyed subscriber list.
pub(crate) struct Registry {
    entries: RwLock<Vec<Entry>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Adds a subscriber and returns its registration id.
    pub(crate) fn insert(&self, subscriber: Arc<dyn Subscribe>) -> u64 {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push(Entry { id, subscriber });
        id
    }

    /// Removes a registration. Unknown ids are ignored.
    pub(crate) fn remove(&self, id: u64) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.retain(|entry| entry.id != id);
    }

    /// Returns the current subscribers, in registration order.
    ///
    /// The lock is released before the caller runs any callback.
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn Subscribe>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .map(|entry| Arc::clone(&entry.subscriber))
            .collect()
    }

    /// Number of active registrations.
    pub(crate) fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
