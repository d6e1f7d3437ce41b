// src/sealed.rs
//! Seal / open workflows tying crypto to the ledger
//!
//! A sealed record is serialized once; the same bytes are hashed, encrypted
//! and signed. Opening reverses it and refuses anything that fails
//! decryption, signature verification or the digest check, or whose
//! sealed record belongs to a different row.

use rsa::RsaPublicKey;
use rusqlite::Connection;
use tracing::debug;

use crate::aliases::CipherKey32;
use crate::crypto::{self, SigningContext};
use crate::db::{self, SealedPayload, TransactionRecord};
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Hash, encrypt and sign the serialized record
pub fn seal_record(
    record: &TransactionRecord,
    key: &CipherKey32,
    signer: &SigningContext,
) -> Result<SealedPayload> {
    let bytes = serde_json::to_vec(record)?;
    Ok(SealedPayload {
        digest: crypto::hash(&bytes),
        envelope: crypto::encrypt(key.expose_secret(), &bytes)?,
        signature: signer.sign(&bytes)?,
    })
}

/// Create the row and its sealed payload atomically
///
/// Nothing is committed unless sealing succeeds. `record` only receives
/// its id and timestamps once the commit has gone through.
pub fn record_transaction(
    conn: &mut Connection,
    record: &mut TransactionRecord,
    key: &CipherKey32,
    signer: &SigningContext,
) -> Result<String> {
    let mut stamped = record.clone();
    let tx = conn.transaction()?;
    let id = db::create_transaction(&tx, &mut stamped)?;
    let sealed = seal_record(&stamped, key, signer)?;
    db::store_sealed_payload(&tx, &id, &sealed)?;
    tx.commit()?;
    *record = stamped;

    debug!(txn_id = %id, digest = %sealed.digest, "recorded sealed transaction");
    Ok(id)
}

/// Decrypt, authenticate and decode the sealed copy of a transaction
pub fn open_sealed_transaction(
    conn: &Connection,
    id: &str,
    key: &CipherKey32,
    public_key: &RsaPublicKey,
) -> Result<TransactionRecord> {
    let sealed = db::load_sealed_payload(conn, id)?
        .ok_or_else(|| CoreError::NotFound { id: id.to_owned() })?;

    let plaintext = crypto::decrypt(key.expose_secret(), &sealed.envelope)?;
    let bytes = plaintext.expose_secret();
    crypto::verify(public_key, bytes, &sealed.signature)?;

    if crypto::hash(bytes) != sealed.digest {
        return Err(CoreError::IntegrityMismatch { id: id.to_owned() });
    }

    let record: TransactionRecord = serde_json::from_slice(bytes)?;
    if record.id != id {
        // Authentic payload, but sealed for another row
        return Err(CoreError::IntegrityMismatch { id: id.to_owned() });
    }

    debug!(txn_id = %id, "opened sealed transaction");
    Ok(record)
}
