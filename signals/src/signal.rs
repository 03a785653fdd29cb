mod read;

pub use read::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    Get, IntoListener, Same, SignalOptions, Subscribe, Subscription, With,
    broadcast::{Broadcast, Listener},
    config::{self, Config},
    error::PersistenceError,
    persistence::Persistence,
    value::ValueCell,
};

/// Process-unique identity of a signal. Clones of a [`Signal`] share it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignalId(u64);

impl SignalId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "signal#{}", self.0) }
}

pub(crate) struct Inner<T> {
    id: SignalId,
    value: ValueCell<T>,
    broadcast: Broadcast,
    persistence: Option<Persistence<T>>,
    last_error: Mutex<Option<Arc<PersistenceError>>>,
}

impl<T> Inner<T> {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let (broadcast, id) = self.broadcast.listen(listener);
        Subscription::new(broadcast, id)
    }
}

/// A reactive value cell.
///
/// `Signal` is a handle: clones refer to the same value, listeners and
/// persistence slot. Reads are synchronous and never stale. A change made by
/// [`set`](Signal::set) or [`update`](Signal::update) is persisted (if configured)
/// and then announced to every listener, in registration order, before the call
/// returns.
pub struct Signal<T>(Arc<Inner<T>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Signal<T>
where T: Clone + Same
{
    /// An in-memory signal holding `initial`
    pub fn new(initial: T) -> Self { Self::from_parts(initial, None, None) }

    fn from_parts(value: T, persistence: Option<Persistence<T>>, error: Option<PersistenceError>) -> Self {
        Self(Arc::new(Inner {
            id: SignalId::next(),
            value: ValueCell::new(value),
            broadcast: Broadcast::new(),
            persistence,
            last_error: Mutex::new(error.map(Arc::new)),
        }))
    }

    pub fn id(&self) -> SignalId { self.0.id }

    /// Replaces the value. No-op if `value` is the [same](Same) as the current value.
    pub fn set(&self, value: T) { self.apply(value) }

    /// Replaces the value with `f(current)`. No-op if the result is the [same](Same)
    /// as the current value, e.g. when `f` hands back a clone of the same `Arc`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        // f runs on a snapshot, outside the lock, so it may read or set this signal
        let current = self.0.value.snapshot();
        self.apply(f(&current))
    }

    /// Read-only handle to this signal
    pub fn reader(&self) -> Read<T> { Read(self.0.clone()) }

    pub fn subscriber_count(&self) -> usize { self.0.broadcast.len() }

    pub fn persist_key(&self) -> Option<&str> { self.0.persistence.as_ref().map(|p| p.key()) }

    /// The most recent contained persistence failure, cleared by the next successful save
    pub fn last_persistence_error(&self) -> Option<Arc<PersistenceError>> {
        self.0.last_error.lock().expect("last error lock is poisoned").clone()
    }

    fn apply(&self, candidate: T) {
        let inner = &self.0;

        // persist under the write lock so the slot never falls behind the in-memory value
        let changed = inner.value.replace_with(candidate, |value| {
            if let Some(persistence) = &inner.persistence {
                let result = persistence.encode(value).map_err(PersistenceError::from).and_then(|payload| persistence.write(&payload));
                self.record(persistence, result);
            }
        });
        if changed.is_none() {
            debug!(signal = %inner.id, "value unchanged, skipping persist and notify");
            return;
        }

        debug!(signal = %inner.id, listeners = inner.broadcast.len(), "notifying listeners");
        inner.broadcast.send();
    }

    fn record(&self, persistence: &Persistence<T>, result: Result<(), PersistenceError>) {
        let mut last_error = self.0.last_error.lock().expect("last error lock is poisoned");
        match result {
            Ok(()) => *last_error = None,
            Err(err) => {
                warn!(signal = %self.0.id, key = %persistence.key(), error = %err, "failed to persist signal value, in-memory value kept");
                *last_error = Some(Arc::new(err));
            }
        }
    }
}

impl<T> Signal<T>
where T: Clone + Same + Serialize + DeserializeOwned
{
    /// Creates a signal, loading its value from storage when `options` name a persist key.
    ///
    /// Persistence never makes construction fail. A missing store, an unreadable slot
    /// or an undecodable payload leaves the signal at `initial` and is logged.
    pub fn with_options(initial: T, options: SignalOptions) -> Self {
        let SignalOptions { persist_key, encrypted, secret, store } = options;
        let Some(key) = persist_key else {
            return Self::new(initial);
        };

        let Some(store) = store.or_else(config::default_store) else {
            warn!(key = %key, "no durable store available, signal will not persist");
            return Self::from_parts(initial, None, Some(PersistenceError::StorageUnavailable(key)));
        };

        let secret = encrypted.then(|| Config::global().resolve_secret(secret.as_deref()).to_owned());
        let persistence = Persistence::new(key, store, secret);

        let (value, error) = match persistence.load() {
            Ok(Some(stored)) => {
                debug!(key = %persistence.key(), encrypted = persistence.encrypted(), "loaded persisted signal value");
                (stored, None)
            }
            Ok(None) => (initial, None),
            Err(err) => {
                warn!(key = %persistence.key(), error = %err, "failed to load persisted signal value, using initial value");
                (initial, Some(err))
            }
        };

        Self::from_parts(value, Some(persistence), error)
    }
}

impl<T: Clone> Get<T> for Signal<T> {
    fn get(&self) -> T { self.0.value.value() }
}

impl<T> With<T> for Signal<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { self.0.value.with(f) }
}

impl<T> Subscribe for Signal<T> {
    fn subscribe<L: IntoListener>(&self, listener: L) -> Subscription { self.0.subscribe(listener.into_listener()) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.value.with(|value| {
            f.debug_struct("Signal")
                .field("id", &self.0.id)
                .field("value", value)
                .field("persist_key", &self.0.persistence.as_ref().map(|p| p.key()))
                .finish()
        })
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.0.value.with(|v| write!(f, "{}", v)) }
}
