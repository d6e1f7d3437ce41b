// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures of the cryptographic layer.
///
/// `Verification` is deliberately opaque: a wrong key, a tampered message
/// and a corrupted signature all look the same to the caller.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    KeySize { expected: usize, actual: usize },

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("malformed base64 input: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("ciphertext envelope too short: {len} bytes, need at least {min}")]
    EnvelopeTooShort { len: usize, min: usize },

    #[error("signing failed: {0}")]
    Signing(#[source] rsa::Error),

    #[error("signature verification failed")]
    Verification,

    #[error("no active signing key has been set")]
    NoActiveKey,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crypto operation failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("transaction {id} not found")]
    NotFound { id: String },

    #[error("sealed payload for transaction {id} does not match its digest")]
    IntegrityMismatch { id: String },
}
