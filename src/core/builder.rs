use std::sync::Arc;

use crate::core::message_log::MessageLog;
use crate::subscribers::Subscribe;
use crate::trace::{NullTrace, StderrTrace, TraceSink};

/// Builder for constructing a [`MessageLog`] with optional features.
pub struct MessageLogBuilder {
    trace: Arc<dyn TraceSink>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl MessageLogBuilder {
    /// Creates a new builder with the default stderr trace sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trace: Arc::new(StderrTrace),
            subscribers: Vec::new(),
        }
    }

    /// Replaces the debug trace sink.
    #[must_use]
    pub fn trace_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace = sink;
        self
    }

    /// Discards trace output entirely.
    #[must_use]
    pub fn without_trace(self) -> Self {
        self.trace_sink(Arc::new(NullTrace))
    }

    /// Adds a subscriber registered for the lifetime of the broadcaster.
    ///
    /// No [`Subscription`](crate::Subscription) guard is handed out; the
    /// registration is never removed. For removable registrations use
    /// [`MessageLog::subscribe`] after building.
    #[must_use]
    pub fn subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Builds and returns the broadcaster.
    pub fn build(self) -> MessageLog {
        let log = MessageLog::with_trace(self.trace);
        for subscriber in self.subscribers {
            log.register_for_life(subscriber);
        }
        log
    }
}

impl Default for MessageLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
