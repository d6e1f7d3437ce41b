// src/crypto/cipher.rs
//! AES-256-CFB payload envelopes
//!
//! Envelope layout (before base64): `IV (16 bytes) || ciphertext`.
//! The ciphertext is exactly as long as the plaintext; CFB needs no padding.
//!
//! This mode gives confidentiality only. Nothing here detects a flipped bit
//! in the envelope, so callers that need tamper evidence must sign or MAC
//! the payload as well (see [`crate::sealed`]).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};

use super::random::{OsRandom, RandomSource};
use super::Result;
use crate::aliases::PlainText;
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZE};
use crate::error::CryptoError;

type Aes256CfbEnc = cfb_mode::Encryptor<aes::Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<aes::Aes256>;

/// Symmetric cipher bound to an injected random source for IV generation
#[derive(Debug, Default, Clone)]
pub struct PayloadCipher<R = OsRandom> {
    source: R,
}

impl<R: RandomSource> PayloadCipher<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Encrypt under `key` with a fresh IV → base64 envelope
    pub fn encrypt(&mut self, key: &[u8], plaintext: &[u8]) -> Result<String> {
        check_key(key)?;

        let mut envelope = vec![0u8; AES_BLOCK_SIZE + plaintext.len()];
        let (iv, body) = envelope.split_at_mut(AES_BLOCK_SIZE);
        self.source.fill_bytes(iv)?;
        body.copy_from_slice(plaintext);

        Aes256CfbEnc::new_from_slices(key, iv)
            .map_err(|_| key_size_error(key))?
            .encrypt(body);

        Ok(STANDARD.encode(&envelope))
    }

    pub fn decrypt(&self, key: &[u8], envelope: &str) -> Result<PlainText> {
        decrypt(key, envelope)
    }
}

/// Encrypt with a fresh IV from the operating system CSPRNG
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<String> {
    PayloadCipher::new(OsRandom).encrypt(key, plaintext)
}

/// Decode an envelope, split off the IV and recover the plaintext
pub fn decrypt(key: &[u8], envelope: &str) -> Result<PlainText> {
    let raw = STANDARD.decode(envelope)?;
    if raw.len() < AES_BLOCK_SIZE {
        return Err(CryptoError::EnvelopeTooShort {
            len: raw.len(),
            min: AES_BLOCK_SIZE,
        });
    }
    check_key(key)?;

    let (iv, ciphertext) = raw.split_at(AES_BLOCK_SIZE);
    let mut plaintext = ciphertext.to_vec();
    Aes256CfbDec::new_from_slices(key, iv)
        .map_err(|_| key_size_error(key))?
        .decrypt(&mut plaintext);

    Ok(PlainText::new(plaintext))
}

fn check_key(key: &[u8]) -> Result<()> {
    if key.len() == AES_KEY_SIZE {
        Ok(())
    } else {
        Err(key_size_error(key))
    }
}

fn key_size_error(key: &[u8]) -> CryptoError {
    CryptoError::KeySize {
        expected: AES_KEY_SIZE,
        actual: key.len(),
    }
}
