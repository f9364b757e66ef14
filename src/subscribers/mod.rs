//! # Broadcast subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for handling records broadcast by a [`MessageLog`](crate::MessageLog).
//!
//! ## Architecture
//! ```text
//! Record flow:
//!   caller ── log_message(msg, tag, level) ──► MessageLog ──► broadcast to all subscribers
//!                                                                │
//!                                                                ├──► Subscribe::on_record(&LogRecord)
//!                                                                │         │
//!                                                                │    ┌────┴─────────┬───────────────┬──────────────┬───────┐
//!                                                                │    ▼              ▼               ▼              ▼       ▼
//!                                                                │  ConsoleLogger  HistoryBuffer  ErrorIndicator  Stream  Custom
//!                                                                │
//!                                                                └──► Subscribe::on_severity_flag(true)   (elevated records only)
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - render or forward records (console, stream relay)
//! - **Stateful subscribers** - accumulate state from records (history ring, flag latch)

mod console;
mod history;
mod indicator;
mod stream;
mod subscribe;

pub use console::ConsoleLogger;
pub use history::HistoryBuffer;
pub use indicator::ErrorIndicator;
pub use stream::RecordStream;
pub use subscribe::Subscribe;
