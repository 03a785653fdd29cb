use base64::{Engine as _, engine::general_purpose::STANDARD};
use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit},
};
use rand_core::OsRng;

use crate::error::{DecodeError, EncodeError};

const KEY_CONTEXT: &str = "keepsake-codec 2025-01 signal payload key";
const NONCE_LEN: usize = 12;

fn cipher(secret: &str) -> ChaCha20Poly1305 {
    let key = blake3::derive_key(KEY_CONTEXT, secret.as_bytes());
    ChaCha20Poly1305::new(Key::from_slice(&key))
}

/// Encrypts `plaintext` and returns base64(nonce || ciphertext || tag)
pub(crate) fn seal(plaintext: &[u8], secret: &str) -> Result<String, EncodeError> {
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
    let ciphertext = cipher(secret).encrypt(&nonce, plaintext).map_err(|_| EncodeError::Encrypt)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(sealed))
}

pub(crate) fn open(sealed: &str, secret: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(sealed.trim())?;
    if bytes.len() < NONCE_LEN {
        return Err(DecodeError::Truncated(bytes.len()));
    }
    let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
    let plaintext = cipher(secret).decrypt(Nonce::from_slice(nonce), ciphertext).map_err(|_| DecodeError::Decrypt)?;
    Ok(String::from_utf8(plaintext)?)
}
