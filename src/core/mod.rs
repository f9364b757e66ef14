//! Broadcaster core: submission, fan-out, and lifecycle.
//!
//! This module contains the embedded implementation of the log broadcaster.
//! The public API from this module is [`MessageLog`], its builder, the
//! [`Subscription`] guard, and the process-wide accessor functions.
//!
//! Internal modules:
//! - [`message_log`]: submission entry points and the synchronous fan-out;
//! - [`registry`]: id-keyed subscriber list behind an `RwLock`;
//! - [`subscription`]: RAII unregistration guard;
//! - [`builder`]: construction-time configuration;
//! - [`global`]: process-wide accessor.

mod builder;
mod global;
mod message_log;
mod registry;
mod subscription;

pub use builder::MessageLogBuilder;
pub use global::{global, install, log_message, try_global};
pub use message_log::MessageLog;
pub use subscription::Subscription;
