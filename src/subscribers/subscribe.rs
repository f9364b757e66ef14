//! # Core subscriber trait.
//!
//! `Subscribe` is the extension point for plugging custom listeners into the
//! broadcaster. Callbacks run synchronously on the thread that submitted the
//! record, before `broadcast` returns.
//!
//! ## Contract
//! - Implementations should return quickly: a slow subscriber delays the
//!   logging caller and every subscriber after it.
//! - A panic in a callback is caught and reported; delivery continues with
//!   the remaining subscribers.
//! - [`Subscribe::on_severity_flag`] defaults to a no-op for subscribers
//!   that only consume full records.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use logvisor::{LogRecord, Subscribe};
//!
//! struct Counter(AtomicUsize);
//!
//! impl Subscribe for Counter {
//!     fn on_record(&self, _record: &LogRecord) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!     fn name(&self) -> &'static str {
//!         "counter"
//!     }
//! }
//! ```

use crate::records::LogRecord;

/// Contract for broadcast listeners.
///
/// Called on the logging thread. Implementations should avoid blocking
/// (hand records to [`RecordStream`](crate::RecordStream) or a channel when
/// slow work is needed).
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one record.
    ///
    /// Called for every submission, in a first pass over all subscribers.
    ///
    /// # Parameters
    /// - `record`: Reference to the record (does not transfer ownership)
    fn on_record(&self, record: &LogRecord);

    /// Handles the severity-flag side channel.
    ///
    /// Called with `true` in a second pass whenever the record's severity is
    /// elevated (anything above `Info`). Carries no record content: listeners
    /// driving an attention indicator need not inspect messages.
    fn on_severity_flag(&self, raised: bool) {
        let _ = raised;
    }

    /// Human-readable name (for panic reports and diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
