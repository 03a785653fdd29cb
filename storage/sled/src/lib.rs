//! Sled-backed durable [`Store`](keepsake_storage::Store) for keepsake signals.

mod database;
mod engine;
mod error;

pub use database::Database;
pub use engine::SledStore;
pub use error::sled_error;
