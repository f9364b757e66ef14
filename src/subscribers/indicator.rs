//! # Severity-flag indicator.
//!
//! [`ErrorIndicator`] consumes only the severity-flag side channel: it
//! latches once any elevated record is broadcast and stays raised until
//! cleared. That is all a status badge or health check needs; record
//! payloads are ignored entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::records::LogRecord;
use crate::subscribers::Subscribe;

/// Latch over the severity-flag channel.
#[derive(Default)]
pub struct ErrorIndicator {
    raised: AtomicBool,
}

impl ErrorIndicator {
    /// Creates a lowered indicator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any elevated record has been broadcast since the last
    /// [`clear`](ErrorIndicator::clear).
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// Lowers the indicator (e.g. after the user acknowledged it).
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Relaxed);
    }
}

impl Subscribe for ErrorIndicator {
    fn on_record(&self, _record: &LogRecord) {}

    fn on_severity_flag(&self, raised: bool) {
        self.raised.fetch_or(raised, Ordering::Relaxed);
    }

    fn name(&self) -> &'static str {
        "error-indicator"
    }
}
