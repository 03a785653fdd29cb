use std::path::PathBuf;
use std::sync::Arc;

use keepsake_storage::{StorageError, Store};
use sled::Config;
use tracing::{debug, trace};

use crate::{database::Database, error::sled_error};

/// Durable signal store. Each persist key is one entry in the `signals` tree,
/// the value being the codec's text payload.
#[derive(Clone)]
pub struct SledStore {
    pub database: Arc<Database>,
}

impl SledStore {
    pub fn with_homedir_folder(folder_name: &str) -> anyhow::Result<Self> {
        let dir = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?.join(folder_name);

        Self::with_path(dir)
    }

    pub fn with_path(path: PathBuf) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&path)?;
        let dbpath = path.join("sled");
        debug!(path = %dbpath.display(), "opening sled signal store");
        Self::with_config(Config::new().path(dbpath))
    }

    /// Opens a store from a caller-built sled config. Tests that reopen the same
    /// directory pass `flush_every_ms(None)` so no background flusher outlives the handle.
    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        let db = config.open()?;
        Ok(Self { database: Arc::new(Database::open(db)?) })
    }

    /// Opens the store under `~/.keepsake`
    pub fn new() -> anyhow::Result<Self> { Self::with_homedir_folder(".keepsake") }

    pub fn new_test() -> anyhow::Result<Self> {
        let db = Config::new().temporary(true).flush_every_ms(None).open()?;
        Ok(Self { database: Arc::new(Database::open(db)?) })
    }

    /// Blocks until all pending writes are on disk, returning the bytes flushed
    pub fn flush(&self) -> Result<usize, StorageError> { self.database.db.flush().map_err(sled_error) }

    /// List every persist key currently holding a payload
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.database
            .signals_tree
            .iter()
            .keys()
            .map(|key| -> Result<String, StorageError> {
                let key = key.map_err(sled_error)?;
                Ok(String::from_utf8(key.to_vec())?)
            })
            .collect()
    }
}

impl Store for SledStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.database.signals_tree.get(key).map_err(sled_error)? {
            Some(ivec) => Ok(Some(String::from_utf8(ivec.to_vec())?)),
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!(key, bytes = value.len(), "SledStore write");
        self.database.signals_tree.insert(key, value.as_bytes()).map_err(sled_error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.database.signals_tree.remove(key).map_err(sled_error)?;
        Ok(())
    }
}
