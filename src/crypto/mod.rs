// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no database
//!
//! All functions work exclusively on in-memory buffers and hold no shared
//! state, so they are safe to call concurrently. The one piece of mutable
//! state, the active signing key, lives in an explicit [`SigningContext`].
mod cipher;
mod context;
mod digest;
mod random;
mod signer;

pub use cipher::{decrypt, encrypt, PayloadCipher};
pub use context::SigningContext;
pub use digest::hash;
pub use random::{OsRandom, RandomSource};
pub use signer::{sign, verify};

pub use rsa::{RsaPrivateKey, RsaPublicKey};

pub type Result<T> = std::result::Result<T, crate::error::CryptoError>;
