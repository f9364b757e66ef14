//! # Severity levels for log records.
//!
//! [`Severity`] classifies a record as routine, suspicious, or failed.
//! The numeric codes (0, 1, 2) appear in the debug trace line; nothing in
//! this crate compares them beyond equality and ordering.
//!
//! ## Label collapse
//!
//! [`Severity::label`] maps `Info` and `Warning` to their own names and every
//! other severity to `CRITICAL`. The console line is a compatibility surface
//! parsed by downstream tooling, so the collapse is deliberate and pinned by
//! tests rather than smoothed over.

use std::fmt;

/// Severity of a log record.
///
/// Ordering follows the numeric codes: `Info < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Routine information.
    Info = 0,
    /// Something looks wrong but the operation continued.
    Warning = 1,
    /// Something failed.
    Critical = 2,
}

impl Severity {
    /// Returns the display label used by console output.
    ///
    /// Anything that is not `Info` or `Warning` renders as `CRITICAL`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            _ => "CRITICAL",
        }
    }

    /// Returns the numeric code used by the trace line.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// True for every severity above [`Severity::Info`].
    ///
    /// This is the trigger condition for the severity-flag side channel.
    #[inline]
    #[must_use]
    pub fn is_elevated(self) -> bool {
        self != Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
