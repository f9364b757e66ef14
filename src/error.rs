//! # Error types for setup operations.
//!
//! The notification path is infallible: `log_message`, broadcast delivery,
//! and sink writes return `()` and degrade silently. Only setup operations
//! that claim process-wide state can fail, and they fail loudly, before
//! anything logs through them.

use thiserror::Error;

/// Setup-time errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LogError {
    /// A process-wide [`MessageLog`](crate::MessageLog) is already installed.
    ///
    /// Raised by [`install`](crate::install) when a second instance is
    /// offered, including the case where an earlier [`global`](crate::global)
    /// call already created the default instance.
    #[error("global message log already installed")]
    AlreadyInstalled,

    /// The `log` facade already has a global logger.
    ///
    /// Raised by [`LogBridge::install`](crate::LogBridge::install) when
    /// another logger claimed the facade first.
    #[cfg(feature = "bridge")]
    #[error("log facade already has a global logger")]
    FacadeConflict,
}

impl LogError {
    /// Returns a short stable label (snake_case) for use in diagnostics.
    ///
    /// # Example
    /// ```
    /// use logvisor::LogError;
    ///
    /// let err = LogError::AlreadyInstalled;
    /// assert_eq!(err.as_label(), "already_installed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LogError::AlreadyInstalled => "already_installed",
            #[cfg(feature = "bridge")]
            LogError::FacadeConflict => "facade_conflict",
        }
    }
}
