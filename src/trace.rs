//! # Debug trace sink.
//!
//! Every submission is copied to a [`TraceSink`] before it is broadcast,
//! whether or not any subscriber is registered. The default sink writes the
//! canonical trace line to stderr; [`NullTrace`] discards it.
//!
//! ## Line format
//! ```text
//! <ISO-8601 timestamp> <tag>[<numeric level>] <message>
//! 2026-08-25T14:30:45 Storage[1] disk full
//! ```

use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::records::LogRecord;

/// Destination for the low-level trace copy of every submission.
///
/// Implementations must not fail observably: a sink that cannot write
/// drops the line. Called synchronously from `log_message`, so writes
/// should be quick.
pub trait TraceSink: Send + Sync + 'static {
    /// Receives one record.
    fn trace(&self, record: &LogRecord);
}

/// Renders the canonical trace line for a record.
///
/// The timestamp is the record's capture time in local ISO-8601
/// (`%Y-%m-%dT%H:%M:%S`); the bracketed number is [`Severity::code`]
/// (0 = info, 1 = warning, 2 = critical).
///
/// [`Severity::code`]: crate::Severity::code
#[must_use]
pub fn trace_line(record: &LogRecord) -> String {
    let ts = DateTime::<Local>::from(record.at).format("%Y-%m-%dT%H:%M:%S");
    format!(
        "{} {}[{}] {}",
        ts,
        record.tag,
        record.level.code(),
        record.message
    )
}

/// Default sink: one [`trace_line`] per record to stderr.
///
/// Write errors are swallowed; tracing never disturbs the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTrace;

impl TraceSink for StderrTrace {
    fn trace(&self, record: &LogRecord) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", trace_line(record));
    }
}

/// Discards every record.
///
/// Useful in tests and in processes that already route records elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn trace(&self, _record: &LogRecord) {}
}
