//! # Synchronous record fan-out to multiple subscribers.
//!
//! Provides [`MessageLog`]: accepts `(message, tag, severity)` submissions,
//! copies each to the debug [`TraceSink`], and delivers the record to every
//! registered subscriber before returning to the caller.
//!
//! ## Architecture
//! ```text
//! log_message(msg, tag, level)
//!     │
//!     ├──► TraceSink::trace(&record)             (stderr by default)
//!     │
//!     └──► broadcast(&record)
//!             ├──► subscriber 1.on_record(&record)
//!             ├──► subscriber 2.on_record(&record)
//!             ├──► subscriber N.on_record(&record)
//!             │
//!             └── level elevated?
//!                   ├──► subscriber 1.on_severity_flag(true)
//!                   ├──► subscriber 2.on_severity_flag(true)
//!                   └──► subscriber N.on_severity_flag(true)
//! ```
//!
//! ## Rules
//! - **Synchronous**: both passes complete on the calling thread before
//!   `broadcast` returns. No queues, no retries, no acknowledgements.
//! - **Infallible**: nothing on this path returns an error; sinks and
//!   subscribers degrade silently.
//! - **Isolation**: a panicking subscriber is caught and reported; the
//!   caller and the remaining subscribers are unaffected.
//! - **No replay**: a subscriber registered after a broadcast never sees it.
//! - **Registration-order delivery** within one record; ordering across
//!   concurrent `log_message` calls is whatever the callers' threads make it.
//!
//! ## Panic handling
//! Each callback runs under `catch_unwind` and a caught panic is reported to
//! stderr with the subscriber's name.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if a subscriber panics while holding its own lock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::builder::MessageLogBuilder;
use crate::core::registry::Registry;
use crate::core::subscription::Subscription;
use crate::records::{LogRecord, Severity};
use crate::subscribers::Subscribe;
use crate::trace::{StderrTrace, TraceSink};

/// Application-wide log broadcaster.
///
/// Cheap to clone: clones share one subscriber registry and one trace sink,
/// so a handle can be passed to every component that logs or subscribes.
#[derive(Clone)]
pub struct MessageLog {
    registry: Arc<Registry>,
    trace: Arc<dyn TraceSink>,
}

impl MessageLog {
    /// Creates a broadcaster with the default stderr trace sink and no
    /// subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_trace(Arc::new(StderrTrace))
    }

    pub(crate) fn with_trace(trace: Arc<dyn TraceSink>) -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            trace,
        }
    }

    /// Returns a builder for configuring the trace sink and fixed
    /// subscribers.
    #[must_use]
    pub fn builder() -> MessageLogBuilder {
        MessageLogBuilder::new()
    }

    /// Submits a log message.
    ///
    /// Builds a stamped [`LogRecord`], copies it to the trace sink, then
    /// broadcasts it. Never fails; returns once every subscriber has been
    /// notified.
    pub fn log_message(
        &self,
        message: impl Into<Arc<str>>,
        tag: impl Into<Arc<str>>,
        level: Severity,
    ) {
        let record = LogRecord::new(message, tag, level);
        self.trace.trace(&record);
        self.broadcast(&record);
    }

    /// Fans one record out to every registered subscriber.
    ///
    /// The first pass delivers the record; when the record is elevated a
    /// second pass delivers the severity flag (`true`) to the same snapshot
    /// of subscribers. The trace sink is not involved.
    pub fn broadcast(&self, record: &LogRecord) {
        let subscribers = self.registry.snapshot();
        for subscriber in &subscribers {
            deliver(subscriber, |s| s.on_record(record));
        }
        if record.level.is_elevated() {
            for subscriber in &subscribers {
                deliver(subscriber, |s| s.on_severity_flag(true));
            }
        }
    }

    /// Registers a subscriber.
    ///
    /// The subscriber receives every subsequent broadcast until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscribe>) -> Subscription {
        let id = self.registry.insert(subscriber);
        Subscription::new(id, Arc::downgrade(&self.registry))
    }

    /// Registers a subscriber for the lifetime of the broadcaster.
    pub(crate) fn register_for_life(&self, subscriber: Arc<dyn Subscribe>) {
        let _ = self.registry.insert(subscriber);
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one callback with panic isolation.
fn deliver(subscriber: &Arc<dyn Subscribe>, callback: impl FnOnce(&dyn Subscribe)) {
    if let Err(panic_err) = panic::catch_unwind(AssertUnwindSafe(|| callback(subscriber.as_ref())))
    {
        let info = {
            let any = &*panic_err;
            if let Some(msg) = any.downcast_ref::<&'static str>() {
                (*msg).to_string()
            } else if let Some(msg) = any.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic".to_string()
            }
        };
        eprintln!(
            "[logvisor] subscriber '{}' panicked: {info}",
            subscriber.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::trace::trace_line;

    /// Collects every delivery for assertions.
    #[derive(Default)]
    struct Recorder {
        records: Mutex<Vec<(String, String, Severity)>>,
        flags: Mutex<Vec<bool>>,
    }

    impl Subscribe for Recorder {
        fn on_record(&self, record: &LogRecord) {
            self.records.lock().unwrap().push((
                record.message.to_string(),
                record.tag.to_string(),
                record.level,
            ));
        }

        fn on_severity_flag(&self, raised: bool) {
            self.flags.lock().unwrap().push(raised);
        }
    }

    struct Panicker;

    impl Subscribe for Panicker {
        fn on_record(&self, _record: &LogRecord) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "panicker"
        }
    }

    fn quiet_log() -> MessageLog {
        MessageLog::builder().without_trace().build()
    }

    #[test]
    fn test_payload_reaches_every_subscriber_unchanged() {
        let log = quiet_log();
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let _sa = log.subscribe(a.clone());
        let _sb = log.subscribe(b.clone());

        log.log_message("disk full", "Storage", Severity::Warning);

        for sub in [&a, &b] {
            let records = sub.records.lock().unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(
                records[0],
                ("disk full".to_string(), "Storage".to_string(), Severity::Warning)
            );
        }
    }

    #[test]
    fn test_flag_fires_only_for_elevated_levels() {
        let log = quiet_log();
        let sub = Arc::new(Recorder::default());
        let _s = log.subscribe(sub.clone());

        log.log_message("ok", "Net", Severity::Info);
        assert!(sub.flags.lock().unwrap().is_empty());

        log.log_message("slow", "Net", Severity::Warning);
        log.log_message("down", "Net", Severity::Critical);
        assert_eq!(*sub.flags.lock().unwrap(), vec![true, true]);
    }

    #[test]
    fn test_record_pass_precedes_flag_pass() {
        #[derive(Default)]
        struct Sequencer {
            calls: Mutex<Vec<&'static str>>,
        }

        impl Subscribe for Sequencer {
            fn on_record(&self, _record: &LogRecord) {
                self.calls.lock().unwrap().push("record");
            }
            fn on_severity_flag(&self, _raised: bool) {
                self.calls.lock().unwrap().push("flag");
            }
        }

        let log = quiet_log();
        let sub = Arc::new(Sequencer::default());
        let _s = log.subscribe(sub.clone());

        log.log_message("down", "Net", Severity::Critical);
        assert_eq!(*sub.calls.lock().unwrap(), vec!["record", "flag"]);
    }

    #[test]
    fn test_broadcast_without_subscribers_is_a_noop() {
        let log = quiet_log();
        assert_eq!(log.subscriber_count(), 0);
        log.log_message("nobody listens", "T", Severity::Critical);
    }

    #[test]
    fn test_late_subscriber_sees_no_replay() {
        let log = quiet_log();
        log.log_message("before", "T", Severity::Warning);

        let sub = Arc::new(Recorder::default());
        let _s = log.subscribe(sub.clone());
        assert!(sub.records.lock().unwrap().is_empty());

        log.log_message("after", "T", Severity::Info);
        let records = sub.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "after");
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let log = quiet_log();
        let sub = Arc::new(Recorder::default());
        let guard = log.subscribe(sub.clone());

        log.log_message("one", "T", Severity::Info);
        drop(guard);
        log.log_message("two", "T", Severity::Info);

        let records = sub.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "one");
        assert_eq!(log.subscriber_count(), 0);
    }

    #[test]
    fn test_guard_outliving_the_broadcaster_is_safe() {
        let log = quiet_log();
        let guard = log.subscribe(Arc::new(Recorder::default()));
        drop(log);
        drop(guard);
    }

    #[test]
    fn test_panicking_subscriber_does_not_stop_the_broadcast() {
        let log = quiet_log();
        let _p = log.subscribe(Arc::new(Panicker));
        let ok = Arc::new(Recorder::default());
        let _s = log.subscribe(ok.clone());

        log.log_message("down", "Net", Severity::Critical);

        let records = ok.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(*ok.flags.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_trace_sink_sees_every_submission() {
        #[derive(Default)]
        struct CaptureTrace {
            lines: Mutex<Vec<String>>,
        }

        impl TraceSink for CaptureTrace {
            fn trace(&self, record: &LogRecord) {
                self.lines.lock().unwrap().push(trace_line(record));
            }
        }

        let capture = Arc::new(CaptureTrace::default());
        let log = MessageLog::builder().trace_sink(capture.clone()).build();

        log.log_message("disk full", "Storage", Severity::Warning);
        log.log_message("ok", "Net", Severity::Info);

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" Storage[1] disk full"));
        assert!(lines[1].ends_with(" Net[0] ok"));
    }

    #[test]
    fn test_clones_share_the_registry() {
        let log = quiet_log();
        let clone = log.clone();
        let sub = Arc::new(Recorder::default());
        let _s = log.subscribe(sub.clone());

        clone.log_message("via clone", "T", Severity::Info);
        assert_eq!(sub.records.lock().unwrap().len(), 1);
        assert_eq!(clone.subscriber_count(), 1);
    }

    #[test]
    fn test_concurrent_submissions_lose_nothing() {
        struct Counter {
            hits: AtomicUsize,
        }

        impl Subscribe for Counter {
            fn on_record(&self, _record: &LogRecord) {
                self.hits.fetch_add(1, Ordering::SeqCst);
            }
        }

        let log = quiet_log();
        let counter = Arc::new(Counter {
            hits: AtomicUsize::new(0),
        });
        let _s = log.subscribe(counter.clone());

        let threads: Vec<_> = (0..8)
            .map(|t| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.log_message(format!("m{t}-{i}"), "load", Severity::Info);
                    }
                })
            })
            .collect();
        for handle in threads {
            handle.join().unwrap();
        }

        assert_eq!(counter.hits.load(Ordering::SeqCst), 400);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_during_a_broadcast() {
        struct SelfRemover {
            guard: Mutex<Option<Subscription>>,
            hits: AtomicUsize,
        }

        impl Subscribe for SelfRemover {
            fn on_record(&self, _record: &LogRecord) {
                self.hits.fetch_add(1, Ordering::SeqCst);
                drop(self.guard.lock().unwrap().take());
            }
        }

        let log = quiet_log();
        let remover = Arc::new(SelfRemover {
            guard: Mutex::new(None),
            hits: AtomicUsize::new(0),
        });
        let guard = log.subscribe(remover.clone());
        *remover.guard.lock().unwrap() = Some(guard);

        log.log_message("first", "T", Severity::Info);
        log.log_message("second", "T", Severity::Info);

        assert_eq!(remover.hits.load(Ordering::SeqCst), 1);
        assert_eq!(log.subscriber_count(), 0);
    }
}
