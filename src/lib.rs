// src/lib.rs
//! microtx-ledger — protected storage for micro-transaction records
//!
//! Features:
//! - SHA-256 digests rendered as lowercase hex
//! - AES-256-CFB payload envelopes with per-call random IVs
//! - RSA PKCS#1 v1.5 signatures over SHA-256
//! - Explicit signing context instead of a process-global key
//! - SQLite ledger storing sealed payloads verbatim

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod sealed;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

// Re-export everything users need at the crate root
pub use aliases::{CipherKey32, PlainText, SecureConversionsExt, SecureRandomExt};
pub use config::load as load_config;
pub use crypto::{
    decrypt, encrypt, hash, sign, verify, OsRandom, PayloadCipher, RandomSource, RsaPrivateKey,
    RsaPublicKey, SigningContext,
};
pub use db::{SealedPayload, TransactionRecord};
pub use error::{CoreError, CryptoError};
pub use sealed::{open_sealed_transaction, record_transaction, seal_record};
