// src/crypto/context.rs
//! Long-lived signing context holding the active private key
//!
//! A context starts out unset. [`SigningContext::set_key`] installs a key
//! and may overwrite a previous one; there is no way to unset it again.
//! Build one at startup, install the key once, then share it by reference
//! (or behind an `Arc`) with every call site that signs.

use std::sync::{PoisonError, RwLock};

use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use super::signer;
use super::Result;
use crate::error::CryptoError;

#[derive(Debug, Default)]
pub struct SigningContext {
    active: RwLock<Option<RsaPrivateKey>>,
}

impl SigningContext {
    /// A context with no active key
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: RsaPrivateKey) -> Self {
        Self {
            active: RwLock::new(Some(key)),
        }
    }

    /// Install `key` as the active signing key, replacing any previous one
    pub fn set_key(&self, key: RsaPrivateKey) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if active.is_some() {
            debug!("replacing active signing key");
        }
        *active = Some(key);
    }

    pub fn is_set(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Public half of the active key, for handing to verifiers
    pub fn public_key(&self) -> Result<RsaPublicKey> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(RsaPublicKey::from)
            .ok_or(CryptoError::NoActiveKey)
    }

    /// Sign `message` with the active key
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        let key = active.as_ref().ok_or(CryptoError::NoActiveKey)?;
        signer::sign(key, message)
    }
}
