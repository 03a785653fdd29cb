use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("value is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("encryption failed")]
    Encrypt,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("stored payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("stored payload is too short to hold a nonce ({0} bytes)")]
    Truncated(usize),
    #[error("decryption failed (wrong secret or corrupted payload)")]
    Decrypt,
    #[error("decrypted payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("stored payload is not valid serialized data: {0}")]
    Deserialize(#[from] serde_json::Error),
}
