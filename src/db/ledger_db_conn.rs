// src/db/ledger_db_conn.rs
use rusqlite::{Connection, Result};
use std::{env, fs, path::Path};
use tracing::{debug, info, warn};

use crate::consts::LEDGER_DB_ENV;

/// Open the ledger DB named by `MTX_LEDGER_DB`, or the configured path
pub fn open_ledger_db() -> Result<Connection> {
    let config = crate::config::load();

    // Allow full test isolation via env vars
    let db_path = env::var(LEDGER_DB_ENV).unwrap_or_else(|_| config.paths.ledger_db.clone());

    open_ledger_db_at(db_path)
}

pub fn open_ledger_db_at<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let db_path = db_path.as_ref();

    if let Some(parent) = db_path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            // Connection::open reports the real failure below
            warn!(dir = %parent.display(), error = %err, "could not create ledger directory");
        }
    }

    debug!(path = %db_path.display(), "opening ledger database");
    let conn = Connection::open(db_path)?;
    migrate(&conn)?;
    info!(path = %db_path.display(), "ledger schema ready");
    Ok(conn)
}

/// Private, throwaway ledger (tests, dry runs)
pub fn open_ledger_db_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrate(&conn)?;
    Ok(conn)
}

/// Ensure the schema exists — safe to run on every open
pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS transactions (
            id TEXT PRIMARY KEY,
            from_acct TEXT NOT NULL,
            to_acct TEXT NOT NULL,
            amount INTEGER NOT NULL,
            currency TEXT NOT NULL CHECK (length(currency) = 3),
            status TEXT NOT NULL CHECK (length(status) <= 20),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sealed_payloads (
            txn_id TEXT PRIMARY KEY REFERENCES transactions(id),
            digest TEXT NOT NULL,
            envelope TEXT NOT NULL,
            signature TEXT NOT NULL,
            sealed_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_from ON transactions(from_acct);
        CREATE INDEX IF NOT EXISTS idx_transactions_to ON transactions(to_acct);
        "#,
    )
}
