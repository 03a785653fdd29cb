use keepsake_storage::StorageError;

pub fn sled_error(err: sled::Error) -> StorageError { StorageError::Backend(Box::new(err)) }
