use std::sync::Arc;

use keepsake_storage::Store;

/// Construction options for [`Signal::with_options`](crate::Signal::with_options).
///
/// ```rust
/// use keepsake_signals::SignalOptions;
///
/// let options = SignalOptions::new().persist_key("prefs").encrypted(true).secret("hunter2");
/// ```
#[derive(Clone, Default)]
pub struct SignalOptions {
    pub(crate) persist_key: Option<String>,
    pub(crate) encrypted: bool,
    pub(crate) secret: Option<String>,
    pub(crate) store: Option<Arc<dyn Store>>,
}

impl SignalOptions {
    pub fn new() -> Self { Self::default() }

    /// Load from and save to this storage slot
    pub fn persist_key(mut self, key: impl Into<String>) -> Self {
        self.persist_key = Some(key.into());
        self
    }

    /// Encrypt the stored payload. Without an explicit [`secret`](Self::secret)
    /// the configured or embedded default secret is used.
    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }

    /// Encryption secret. Ignored unless the signal is encrypted.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Store to persist into, overriding the process-wide default store
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }
}

impl std::fmt::Debug for SignalOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalOptions")
            .field("persist_key", &self.persist_key)
            .field("encrypted", &self.encrypted)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("store", &self.store.is_some())
            .finish()
    }
}
