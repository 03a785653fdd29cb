use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use tracing::trace;

/// A zero-argument change listener
pub type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Trait for types that can be converted into change listeners.
pub trait IntoListener {
    fn into_listener(self) -> Listener;
}

/// Fans a change notification out to listeners in registration order.
#[derive(Clone, Default)]
pub(crate) struct Broadcast(Arc<Inner>);

#[derive(Default)]
pub(crate) struct Inner {
    // keyed by a monotonic id so iteration order is registration order
    listeners: RwLock<BTreeMap<u64, Listener>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("Broadcast").field("listeners", &self.len()).finish() }
}

impl Broadcast {
    pub fn new() -> Self { Self::default() }

    pub fn listen(&self, listener: Listener) -> (Weak<Inner>, u64) {
        let id = self.0.next_id.fetch_add(1, Ordering::Relaxed);
        self.0.listeners.write().expect("listeners lock is poisoned").insert(id, listener);
        trace!(id, "listener added");
        (Arc::downgrade(&self.0), id)
    }

    /// Calls every listener registered when the send begins.
    pub fn send(&self) {
        // Snapshot so listeners can subscribe, unsubscribe or send again without holding the lock
        let listeners: Vec<Listener> = self.0.listeners.read().expect("listeners lock is poisoned").values().cloned().collect();

        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize { self.0.listeners.read().expect("listeners lock is poisoned").len() }
}

impl Inner {
    /// Returns true if the listener was still registered
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.listeners.write().expect("listeners lock is poisoned").remove(&id).is_some();
        if removed {
            trace!(id, "listener removed");
        }
        removed
    }

    pub fn contains(&self, id: u64) -> bool { self.listeners.read().expect("listeners lock is poisoned").contains_key(&id) }
}

impl<F> IntoListener for F
where F: Fn() + Send + Sync + 'static
{
    fn into_listener(self) -> Listener { Arc::new(self) }
}

impl IntoListener for std::sync::mpsc::Sender<()> {
    fn into_listener(self) -> Listener {
        Arc::new(move || {
            let _ = self.send(()); // receiver gone is not our problem
        })
    }
}

#[cfg(feature = "tokio")]
impl IntoListener for tokio::sync::mpsc::UnboundedSender<()> {
    fn into_listener(self) -> Listener {
        Arc::new(move || {
            let _ = self.send(());
        })
    }
}
