// src/crypto/digest.rs
use sha2::{Digest, Sha256};

use crate::consts::DIGEST_SIZE;

/// Compute SHA-256 and return it as a 64-character lowercase hex string
pub fn hash(data: &[u8]) -> String {
    hex::encode(digest(data))
}

/// Raw SHA-256 digest, the input to PKCS#1 v1.5 signing
pub(crate) fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(data).into()
}
