// src/crypto/signer.rs
//! RSA PKCS#1 v1.5 signatures over SHA-256 digests
//!
//! PKCS#1 v1.5 signing is deterministic: the same key and message always
//! give the same signature bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use super::digest::digest;
use super::Result;
use crate::error::CryptoError;

/// Hash `message` and sign the digest → base64 signature
pub fn sign(private_key: &RsaPrivateKey, message: &[u8]) -> Result<String> {
    let signature = private_key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest(message))
        .map_err(CryptoError::Signing)?;
    Ok(STANDARD.encode(signature))
}

/// Check a base64 signature over `message` against `public_key`
///
/// Every mismatch surfaces as [`CryptoError::Verification`]; only malformed
/// base64 is reported separately.
pub fn verify(public_key: &RsaPublicKey, message: &[u8], signature: &str) -> Result<()> {
    let signature = STANDARD.decode(signature)?;
    public_key
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest(message), &signature)
        .map_err(|err| {
            // Detail stays in the trace, never in the returned error
            debug!(
                signature_len = signature.len(),
                modulus_len = public_key.size(),
                reason = %err,
                "signature rejected"
            );
            CryptoError::Verification
        })
}
