//! Durable key-value storage for keepsake signals.
//!
//! A [`Store`] maps slot names to text payloads. Signals read their slot once
//! at construction and write it after every change. Implementations are
//! synchronous; a store that blocks makes `Signal::set` block with it.

mod error;
mod memory;

pub use error::*;
pub use memory::*;

/// A synchronous text key-value store shared by any number of signals.
///
/// Writers to the same key race; the last write wins.
pub trait Store: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if the slot is empty
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empties the slot. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
