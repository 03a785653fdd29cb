use std::sync::{Mutex, Weak};

use crate::broadcast;

/// Registration of one listener on one signal.
///
/// Dropping the subscription unsubscribes. Call [`Subscription::detach`] to keep
/// the listener registered for the lifetime of the signal instead.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    inner: Mutex<Weak<broadcast::Inner>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(inner: Weak<broadcast::Inner>, id: u64) -> Self { Self { inner: Mutex::new(inner), id } }

    /// Removes exactly this listener. Calling it again is a no-op.
    pub fn unsubscribe(&self) {
        // take the weak ref so later calls and drop find nothing to remove
        let inner = std::mem::take(&mut *self.inner.lock().expect("subscription lock is poisoned"));
        if let Some(inner) = inner.upgrade() {
            inner.remove(self.id);
        }
    }

    /// Whether the listener is still registered with a live signal
    pub fn is_active(&self) -> bool {
        self.inner.lock().expect("subscription lock is poisoned").upgrade().is_some_and(|inner| inner.contains(self.id))
    }

    /// Leaves the listener registered until the signal itself is dropped.
    pub fn detach(self) { *self.inner.lock().expect("subscription lock is poisoned") = Weak::new(); }
}

impl Drop for Subscription {
    fn drop(&mut self) { self.unsubscribe(); }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).field("active", &self.is_active()).finish()
    }
}
