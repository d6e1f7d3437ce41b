// tests/sealed_workflow_tests.rs
mod common;
use common::{other_key, primary_key, TestLedger};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use microtx_ledger::aliases::{CipherKey32, SecureRandomExt};
use microtx_ledger::crypto::{decrypt, hash, verify, SigningContext};
use microtx_ledger::db::{
    get_transaction, load_sealed_payload, open_ledger_db_in_memory, store_sealed_payload,
    TransactionRecord,
};
use microtx_ledger::error::{CoreError, CryptoError};
use microtx_ledger::{open_sealed_transaction, record_transaction, seal_record};

fn sample_record() -> TransactionRecord {
    TransactionRecord::new("acct-carol", "acct-dave", 3, "USD", "settled")
}

#[test]
fn test_record_and_open_roundtrip() {
    common::setup();
    let mut ledger = TestLedger::new();
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());
    let mut record = sample_record();

    let id = record_transaction(&mut ledger.conn, &mut record, &key, &signer).unwrap();

    let opened =
        open_sealed_transaction(&ledger.conn, &id, &key, &signer.public_key().unwrap()).unwrap();

    assert_eq!(opened, record);
    assert_eq!(opened, get_transaction(&ledger.conn, &id).unwrap());
}

#[test]
fn test_sealed_parts_are_independently_checkable() {
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());
    let record = sample_record();

    let sealed = seal_record(&record, &key, &signer).unwrap();
    let plaintext = decrypt(key.expose_secret(), &sealed.envelope).unwrap();

    assert_eq!(hash(plaintext.expose_secret()), sealed.digest);
    verify(
        &primary_key().to_public_key(),
        plaintext.expose_secret(),
        &sealed.signature,
    )
    .unwrap();
}

#[test]
fn test_record_without_signing_key_persists_nothing() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::new();
    let mut record = sample_record();

    let result = record_transaction(&mut conn, &mut record, &key, &signer);
    assert!(matches!(
        result,
        Err(CoreError::Crypto(CryptoError::NoActiveKey))
    ));
    assert!(record.id.is_empty());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_open_rejects_wrong_public_key() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());

    let id = record_transaction(&mut conn, &mut sample_record(), &key, &signer).unwrap();

    let result = open_sealed_transaction(&conn, &id, &key, &other_key().to_public_key());
    assert!(matches!(
        result,
        Err(CoreError::Crypto(CryptoError::Verification))
    ));
}

#[test]
fn test_open_detects_tampered_envelope() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());
    let public_key = signer.public_key().unwrap();

    let id = record_transaction(&mut conn, &mut sample_record(), &key, &signer).unwrap();

    let mut sealed = load_sealed_payload(&conn, &id).unwrap().unwrap();
    let mut raw = STANDARD.decode(&sealed.envelope).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    sealed.envelope = STANDARD.encode(&raw);
    store_sealed_payload(&conn, &id, &sealed).unwrap();

    // CFB alone would hand back the flipped byte; the signature catches it
    let result = open_sealed_transaction(&conn, &id, &key, &public_key);
    assert!(matches!(
        result,
        Err(CoreError::Crypto(CryptoError::Verification))
    ));
}

#[test]
fn test_open_detects_digest_mismatch() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());
    let public_key = signer.public_key().unwrap();

    let id = record_transaction(&mut conn, &mut sample_record(), &key, &signer).unwrap();

    let mut sealed = load_sealed_payload(&conn, &id).unwrap().unwrap();
    sealed.digest = hash(b"something else");
    store_sealed_payload(&conn, &id, &sealed).unwrap();

    let result = open_sealed_transaction(&conn, &id, &key, &public_key);
    assert!(matches!(result, Err(CoreError::IntegrityMismatch { id: bad }) if bad == id));
}

#[test]
fn test_open_rejects_payload_moved_to_another_row() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::with_key(primary_key().clone());
    let public_key = signer.public_key().unwrap();

    let mut big =
        TransactionRecord::new("acct-alice", "acct-mallory", 1_000_000, "USD", "pending");
    let mut small = TransactionRecord::new("acct-alice", "acct-bob", 1, "USD", "pending");
    let big_id = record_transaction(&mut conn, &mut big, &key, &signer).unwrap();
    let small_id = record_transaction(&mut conn, &mut small, &key, &signer).unwrap();

    let moved = load_sealed_payload(&conn, &big_id).unwrap().unwrap();
    store_sealed_payload(&conn, &small_id, &moved).unwrap();

    let result = open_sealed_transaction(&conn, &small_id, &key, &public_key);
    assert!(matches!(result, Err(CoreError::IntegrityMismatch { id }) if id == small_id));

    // The untouched row still opens
    assert_eq!(
        open_sealed_transaction(&conn, &big_id, &key, &public_key).unwrap(),
        big
    );
}

#[test]
fn test_record_failure_leaves_caller_record_untouched() {
    let mut conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();
    let signer = SigningContext::new();
    let mut record = sample_record();
    let before = record.clone();

    assert!(record_transaction(&mut conn, &mut record, &key, &signer).is_err());
    assert_eq!(record, before);
}

#[test]
fn test_open_unknown_id_is_not_found() {
    let conn = open_ledger_db_in_memory().unwrap();
    let key = CipherKey32::random();

    let result =
        open_sealed_transaction(&conn, "missing", &key, &primary_key().to_public_key());
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}
