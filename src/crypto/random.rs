// src/crypto/random.rs
//! Random byte providers
//!
//! The cipher never builds its own randomness: callers hand it a
//! [`RandomSource`]. Production code uses [`OsRandom`]; tests can plug in a
//! fixed source to get reproducible envelopes.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::CryptoError;

/// Fills buffers with cryptographically secure random bytes
pub trait RandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill_bytes(dest)
    }
}

/// Operating-system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| CryptoError::RandomSource(err.to_string()))
    }
}
