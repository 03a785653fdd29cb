use std::sync::Arc;

use keepsake_codec::EncodeError;
use keepsake_storage::Store;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::PersistenceError;

type Encoder<T> = fn(&T, Option<&str>) -> Result<String, EncodeError>;

/// Binds a signal to one slot of a durable store.
pub(crate) struct Persistence<T> {
    key: String,
    store: Arc<dyn Store>,
    // Some iff the signal is encrypted
    secret: Option<String>,
    // captured at construction so the write path needs no serde bounds
    encode: Encoder<T>,
}

impl<T> Persistence<T> {
    pub fn new(key: String, store: Arc<dyn Store>, secret: Option<String>) -> Self
    where T: Serialize {
        Self { key, store, secret, encode: keepsake_codec::encode::<T> }
    }

    pub fn key(&self) -> &str { &self.key }

    pub fn encrypted(&self) -> bool { self.secret.is_some() }

    /// Reads and decodes the stored value, `None` if the slot is empty
    pub fn load(&self) -> Result<Option<T>, PersistenceError>
    where T: DeserializeOwned {
        let Some(stored) = self.store.read(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(keepsake_codec::decode(&stored, self.secret.as_deref())?))
    }

    pub fn encode(&self, value: &T) -> Result<String, EncodeError> { (self.encode)(value, self.secret.as_deref()) }

    pub fn write(&self, payload: &str) -> Result<(), PersistenceError> {
        self.store.write(&self.key, payload)?;
        Ok(())
    }
}
