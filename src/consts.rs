// src/consts.rs
//! Shared constants — cryptographic sizes and defaults

/// AES block size in bytes; also the IV length for CFB mode
pub const AES_BLOCK_SIZE: usize = 16;

/// Required symmetric key length (AES-256)
pub const AES_KEY_SIZE: usize = 32;

/// SHA-256 output length in bytes
pub const DIGEST_SIZE: usize = 32;

/// Length of a rendered digest (lowercase hex)
pub const DIGEST_HEX_LEN: usize = DIGEST_SIZE * 2;

/// Env var naming the TOML config file
pub const CONFIG_ENV: &str = "MTX_CONFIG";

/// Env var overriding the ledger database path
pub const LEDGER_DB_ENV: &str = "MTX_LEDGER_DB";

/// Config file looked up when `MTX_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "ledger-config.toml";

/// Fallback ledger path when the platform has no local data dir
pub const FALLBACK_LEDGER_DB: &str = "data/ledger.db";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "microtx_ledger=info";
