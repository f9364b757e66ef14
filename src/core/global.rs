//! # Process-wide accessor.
//!
//! One [`MessageLog`] per process, reachable from arbitrary call sites.
//! Application startup may [`install`] a configured instance; otherwise the
//! first [`global`] call lazily creates a default one. The instance lives
//! until process teardown and is never torn down explicitly.

use std::sync::{Arc, OnceLock};

use crate::core::message_log::MessageLog;
use crate::error::LogError;
use crate::records::Severity;

static GLOBAL: OnceLock<MessageLog> = OnceLock::new();

/// Installs the process-wide broadcaster.
///
/// Call once during application startup, before anything logs through the
/// free functions. Fails with [`LogError::AlreadyInstalled`] when an
/// instance is already present, including the default created by an earlier
/// [`global`] call.
pub fn install(log: MessageLog) -> Result<(), LogError> {
    GLOBAL.set(log).map_err(|_| LogError::AlreadyInstalled)
}

/// Returns the process-wide broadcaster, creating a default one on first
/// use.
pub fn global() -> &'static MessageLog {
    GLOBAL.get_or_init(MessageLog::new)
}

/// Returns the process-wide broadcaster only if one exists already.
///
/// Unlike [`global`], never creates the default instance.
#[must_use]
pub fn try_global() -> Option<&'static MessageLog> {
    GLOBAL.get()
}

/// Submits a message to the process-wide broadcaster.
///
/// Convenience for call sites without a [`MessageLog`] handle:
///
/// ```
/// use logvisor::Severity;
///
/// logvisor::log_message("cache warmed", "Cache", Severity::Info);
/// ```
pub fn log_message(message: impl Into<Arc<str>>, tag: impl Into<Arc<str>>, level: Severity) {
    global().log_message(message, tag, level);
}
