use keepsake_codec::{DecodeError, EncodeError};
use keepsake_storage::StorageError;
use thiserror::Error;

/// A failure on the persistence path of a signal.
///
/// These never escape `Signal` operations. They are logged and kept as the
/// signal's [last persistence error](crate::Signal::last_persistence_error).
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("no durable store available for key {0:?}")]
    StorageUnavailable(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
