use std::sync::{Arc, RwLock};

use crate::Same;

/// The single live value of a signal.
///
/// Held behind an `Arc` so readers take a snapshot and release the lock
/// before running any caller code.
pub(crate) struct ValueCell<T>(RwLock<Arc<T>>);

impl<T> ValueCell<T> {
    pub fn new(value: T) -> Self { Self(RwLock::new(Arc::new(value))) }

    pub fn snapshot(&self) -> Arc<T> { self.0.read().expect("value lock is poisoned").clone() }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let snapshot = self.snapshot();
        f(&snapshot)
    }

    /// Stores `candidate` unless it is the same as the current value, then calls `f`
    /// with the new value while still holding the write lock.
    /// Returns `None` (and leaves the cell untouched) when nothing changed.
    pub fn replace_with<R>(&self, candidate: T, f: impl FnOnce(&T) -> R) -> Option<R>
    where T: Same {
        let mut current = self.0.write().expect("value lock is poisoned");
        if (**current).same(&candidate) {
            return None;
        }
        *current = Arc::new(candidate);
        Some(f(&**current))
    }
}

impl<T: Clone> ValueCell<T> {
    pub fn value(&self) -> T { T::clone(&self.snapshot()) }
}
