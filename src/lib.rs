//! # logvisor
//!
//! **Logvisor** is a lightweight application-wide message log for Rust.
//!
//! It provides one primitive done carefully: a synchronous, in-process
//! broadcast of `(message, tag, severity)` records to any number of
//! registered subscribers, plus a payload-free severity-flag side channel
//! and a debug trace copy of every submission. The crate is designed as the
//! logging backbone of larger applications, not as a log framework.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   caller ──── log_message(msg, tag, level) ───► MessageLog
//!                                                     │
//!                                       ┌─────────────┴─────────────┐
//!                                       ▼                           ▼
//!                                  TraceSink                    broadcast
//!                                  (stderr line,           (synchronous, on the
//!                                   always written)          calling thread)
//!                                                                  │
//!                          ┌───────────────┬──────────────┬────────┴───────┬──────────────┐
//!                          ▼               ▼              ▼                ▼              ▼
//!                    ConsoleLogger   HistoryBuffer  ErrorIndicator   RecordStream      Custom
//!                    (stdout line)   (bounded ring) (boolean latch)  (tokio broadcast  (impl Subscribe)
//!                                                                     to async land)
//! ```
//!
//! ### Delivery
//! ```text
//! log_message(msg, tag, level)
//!   ├─► build LogRecord { message, tag, level, at: now }
//!   ├─► TraceSink::trace(&record)            regardless of subscribers
//!   └─► broadcast(&record)
//!         ├─► pass 1: every subscriber.on_record(&record)
//!         └─► pass 2 (level != Info): every subscriber.on_severity_flag(true)
//!
//! Both passes run on the calling thread; a panicking subscriber is caught,
//! reported, and skipped. Nothing is queued, acknowledged, or replayed.
//! ```
//!
//! ## Features
//! | Area               | Description                                                       | Key types / traits                   |
//! |--------------------|-------------------------------------------------------------------|--------------------------------------|
//! | **Submission**     | Accept `(message, tag, severity)` triples from any thread.        | [`MessageLog`], [`Severity`]         |
//! | **Subscriber API** | Hook into the record stream (rendering, metrics, custom).         | [`Subscribe`], [`Subscription`]      |
//! | **Console output** | Fixed-format stdout rendering with attach/detach lifetime.        | [`ConsoleLogger`]                    |
//! | **Retention**      | Bounded in-memory history of recent records.                      | [`HistoryBuffer`]                    |
//! | **Attention flag** | Latched "something elevated happened" indicator.                  | [`ErrorIndicator`]                   |
//! | **Async relay**    | Feed records into async consumers without blocking the caller.    | [`RecordStream`]                     |
//! | **Debug trace**    | Canonical trace line for every submission.                        | [`TraceSink`], [`trace_line`]        |
//! | **Errors**         | Typed errors for setup operations.                                | [`LogError`]                         |
//!
//! ## Optional features
//! - `bridge` _(default)_: routes the [`log`] facade into a broadcaster via
//!   [`LogBridge`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use logvisor::{ConsoleLogger, HistoryBuffer, MessageLog, Severity};
//!
//! let log = MessageLog::new();
//!
//! // Console rendering for as long as the guard lives.
//! let console = ConsoleLogger::attach(&log);
//!
//! // Keep the last records around for inspection.
//! let history = Arc::new(HistoryBuffer::new(256));
//! let _subscription = log.subscribe(history.clone());
//!
//! log.log_message("service started", "Core", Severity::Info);
//! log.log_message("disk almost full", "Storage", Severity::Warning);
//!
//! assert_eq!(history.len(), 2);
//! drop(console); // stdout rendering stops here
//! ```
mod core;
mod error;
mod records;
mod subscribers;
mod trace;

// ---- Public re-exports ----

pub use crate::core::{global, install, log_message, try_global};
pub use crate::core::{MessageLog, MessageLogBuilder, Subscription};
pub use error::LogError;
pub use records::{LogRecord, Severity};
pub use subscribers::{ConsoleLogger, ErrorIndicator, HistoryBuffer, RecordStream, Subscribe};
pub use trace::{NullTrace, StderrTrace, TraceSink, trace_line};

// Optional: route the `log` facade into a broadcaster.
// Enabled by default; opt out with `default-features = false`.
#[cfg(feature = "bridge")]
mod bridge;
#[cfg(feature = "bridge")]
pub use bridge::LogBridge;
