use std::sync::{Arc, OnceLock, RwLock};

use keepsake_codec::DEFAULT_SECRET;
use keepsake_storage::Store;

/// Environment variable holding the process-wide default encryption secret
pub const SECRET_ENV: &str = "KEEPSAKE_SECRET";

/// Process-wide settings, read from the environment once.
#[derive(Clone, Default)]
pub struct Config {
    /// Secret used by encrypted signals that were not given one explicitly
    pub default_secret: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").field("default_secret", &self.default_secret.as_ref().map(|_| "<redacted>")).finish()
    }
}

static GLOBAL: OnceLock<Config> = OnceLock::new();
static DEFAULT_STORE: RwLock<Option<Arc<dyn Store>>> = RwLock::new(None);

impl Config {
    pub fn from_env() -> Self { Self::from_lookup(|name| std::env::var(name).ok()) }

    /// Builds a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self { default_secret: lookup(SECRET_ENV).filter(|secret| !secret.is_empty()) }
    }

    /// The config loaded from the environment on first use
    pub fn global() -> &'static Config { GLOBAL.get_or_init(Config::from_env) }

    /// Explicit secret, then the configured default, then [`DEFAULT_SECRET`].
    pub fn resolve_secret<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.or(self.default_secret.as_deref()).unwrap_or(DEFAULT_SECRET)
    }
}

/// Installs the store used by persisted signals that were not given one.
pub fn set_default_store(store: Arc<dyn Store>) { *DEFAULT_STORE.write().expect("default store lock is poisoned") = Some(store); }

/// Removes the process-wide default store. Signals already bound keep theirs.
pub fn clear_default_store() { *DEFAULT_STORE.write().expect("default store lock is poisoned") = None; }

pub fn default_store() -> Option<Arc<dyn Store>> { DEFAULT_STORE.read().expect("default store lock is poisoned").clone() }
