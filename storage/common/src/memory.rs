use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::{StorageError, Store};

/// Process-local store. Clones share the same slots, which makes it usable as a
/// stand-in for durable storage in tests and in contexts with no disk.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore(Arc<DashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Raw payload for `key`, bypassing the [`Store`] error type
    pub fn raw(&self, key: &str) -> Option<String> { self.0.get(key).map(|v| v.value().clone()) }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> { Ok(self.raw(key)) }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!(key, bytes = value.len(), "MemoryStore write");
        self.0.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key);
        Ok(())
    }
}
