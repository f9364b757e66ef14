//! # Subscription guard.
//!
//! [`Subscription`] ties a registration to a value: while the guard lives the
//! subscriber receives broadcasts, and dropping the guard unregisters it.
//! Listener lifetime and registration can therefore never drift apart.

use std::sync::Weak;

use crate::core::registry::Registry;

/// RAII guard for one subscriber registration.
///
/// Returned by [`MessageLog::subscribe`](crate::MessageLog::subscribe).
/// Dropping the guard (or calling [`Subscription::unsubscribe`]) removes the
/// registration. Removal is idempotent and remains safe after the
/// broadcaster itself is gone.
#[must_use = "dropping a Subscription unregisters its subscriber"]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub(crate) fn new(id: u64, registry: Weak<Registry>) -> Self {
        Self { id, registry }
    }

    /// Registration id (diagnostics only).
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unregisters now.
    ///
    /// Consumes the guard; the `Drop` impl performs the removal.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
