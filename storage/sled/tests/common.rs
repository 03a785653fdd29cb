use std::str::FromStr;

use keepsake_storage_sled::SledStore;
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

#[allow(unused)]
pub fn open_at(dir: &tempfile::TempDir) -> Result<SledStore, anyhow::Error> {
    SledStore::with_config(sled::Config::new().path(dir.path().join("sled")).flush_every_ms(None))
}
