// tests/common.rs
//! Shared test utilities — logging setup, RSA fixtures, temp ledgers

use microtx_ledger::crypto::{RandomSource, RsaPrivateKey};
use microtx_ledger::db::open_ledger_db_at;
use microtx_ledger::CryptoError;
use rsa::rand_core::OsRng;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;
use tempfile::TempDir;

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    // RUST_LOG= still overrides; idempotent across tests
    #[cfg(feature = "logging")]
    microtx_ledger::logging::init_with_filter("microtx_ledger=debug");

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

// Small keys keep the suite fast; 1024 bits still fits PKCS#1 v1.5 + SHA-256
const TEST_KEY_BITS: usize = 1024;

static PRIMARY_KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
static OTHER_KEY: OnceLock<RsaPrivateKey> = OnceLock::new();

#[allow(dead_code)]
pub fn primary_key() -> &'static RsaPrivateKey {
    PRIMARY_KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, TEST_KEY_BITS).expect("keygen"))
}

#[allow(dead_code)]
pub fn other_key() -> &'static RsaPrivateKey {
    OTHER_KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, TEST_KEY_BITS).expect("keygen"))
}

/// Replays a fixed byte pattern — deterministic IVs for vector tests
#[allow(dead_code)]
pub struct FixedRandom(pub Vec<u8>);

impl RandomSource for FixedRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = self.0[i % self.0.len()];
        }
        Ok(())
    }
}

/// Simulates an exhausted entropy source
#[allow(dead_code)]
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), CryptoError> {
        Err(CryptoError::RandomSource("entropy pool unavailable".into()))
    }
}

/// File-backed ledger in its own temp dir, removed on drop
#[allow(dead_code)]
pub struct TestLedger {
    pub conn: Connection,
    pub path: PathBuf,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestLedger {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ledger").join("ledger.db");
        let conn = open_ledger_db_at(&path).expect("open ledger db");
        Self {
            conn,
            path,
            _dir: dir,
        }
    }
}
