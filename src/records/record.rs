//! # Log record payload.
//!
//! [`LogRecord`] is the unit carried by one broadcast: message text, a tag
//! naming the originating subsystem, a [`Severity`], and the capture time.
//! Text fields are `Arc<str>`, so cloning a record is cheap and the same
//! allocation is shared by every subscriber and relay channel.

use std::sync::Arc;
use std::time::SystemTime;

use crate::records::Severity;

/// One log submission.
///
/// Created by [`MessageLog::log_message`](crate::MessageLog::log_message) at
/// the call site and handed to subscribers by shared reference for the
/// duration of the broadcast. The broadcaster itself never stores records.
#[derive(Clone, Debug)]
pub struct LogRecord {
    /// Message text. Arbitrary UTF-8, no length limit.
    pub message: Arc<str>,
    /// Tag naming the originating subsystem (e.g. `"Storage"`).
    pub tag: Arc<str>,
    /// Severity of this record.
    pub level: Severity,
    /// Wall-clock capture time, rendered by the trace line.
    pub at: SystemTime,
}

impl LogRecord {
    /// Creates a record stamped with the current wall-clock time.
    pub fn new(message: impl Into<Arc<str>>, tag: impl Into<Arc<str>>, level: Severity) -> Self {
        Self {
            message: message.into(),
            tag: tag.into(),
            level,
            at: SystemTime::now(),
        }
    }
}
