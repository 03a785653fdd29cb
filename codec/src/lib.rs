/*!
Value codec for keepsake signals.

A value is stored as its canonical JSON text. When a secret is supplied the
JSON text is sealed with ChaCha20-Poly1305 under a key derived from the secret,
and the stored form becomes base64 of `nonce || ciphertext`.

```rust
use keepsake_codec::{decode, encode};

let stored = encode(&vec![1, 2, 3], Some("hunter2")).unwrap();
let value: Vec<i32> = decode(&stored, Some("hunter2")).unwrap();
assert_eq!(value, vec![1, 2, 3]);
```

# Default secret

[`DEFAULT_SECRET`] ships inside this crate and is therefore public. Payloads
sealed with it are obfuscated, not confidential. Anyone with the crate source
can decrypt them.
*/

mod cipher;
mod error;

pub use error::*;

use serde::{Serialize, de::DeserializeOwned};

/// Fallback secret for encrypted signals when neither the caller nor the
/// environment provides one. Obfuscation only.
pub const DEFAULT_SECRET: &str = "keepsake:default-secret:v1";

/// Serializes `value` to JSON text, sealing it with `secret` when one is given.
pub fn encode<T: Serialize + ?Sized>(value: &T, secret: Option<&str>) -> Result<String, EncodeError> {
    let text = serde_json::to_string(value)?;
    match secret {
        Some(secret) => cipher::seal(text.as_bytes(), secret),
        None => Ok(text),
    }
}

/// Inverse of [`encode`]. The same `secret` (or lack of one) must be supplied.
pub fn decode<T: DeserializeOwned>(stored: &str, secret: Option<&str>) -> Result<T, DecodeError> {
    match secret {
        Some(secret) => {
            let text = cipher::open(stored, secret)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(serde_json::from_str(stored)?),
    }
}
