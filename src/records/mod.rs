//! # Record data model.
//!
//! The payload types every other module consumes:
//! - [`LogRecord`]: one `(message, tag, severity)` submission plus timestamp;
//! - [`Severity`]: the three-level classification and its display rules.

mod record;
mod severity;

pub use record::LogRecord;
pub use severity::Severity;
