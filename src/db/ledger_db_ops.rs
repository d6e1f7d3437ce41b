// src/db/ledger_db_ops.rs
//! Ledger database operations
//!
//! Plain record <-> row mapping. Sealed payloads are stored verbatim;
//! nothing here looks inside them.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::record::{SealedPayload, TransactionRecord};
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Insert a new transaction, returning its freshly assigned id
///
/// The id and both timestamps are written back into `record`.
pub fn create_transaction(conn: &Connection, record: &mut TransactionRecord) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    conn.execute(
        "INSERT INTO transactions
            (id, from_acct, to_acct, amount, currency, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            &id,
            &record.from_acct,
            &record.to_acct,
            record.amount,
            &record.currency,
            &record.status,
            now,
        ],
    )?;

    record.id = id.clone();
    record.created_at = now;
    record.updated_at = now;
    Ok(id)
}

pub fn get_transaction(conn: &Connection, id: &str) -> Result<TransactionRecord> {
    conn.query_row(
        "SELECT id, from_acct, to_acct, amount, currency, status, created_at, updated_at
         FROM transactions WHERE id = ?1",
        [id],
        row_to_record,
    )
    .optional()?
    .ok_or_else(|| CoreError::NotFound { id: id.to_owned() })
}

/// Store (or replace) the sealed payload for an existing transaction
pub fn store_sealed_payload(conn: &Connection, id: &str, sealed: &SealedPayload) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO sealed_payloads (txn_id, digest, envelope, signature)
         VALUES (?1, ?2, ?3, ?4)",
        params![id, &sealed.digest, &sealed.envelope, &sealed.signature],
    )?;
    Ok(())
}

pub fn load_sealed_payload(conn: &Connection, id: &str) -> Result<Option<SealedPayload>> {
    let sealed = conn
        .query_row(
            "SELECT digest, envelope, signature FROM sealed_payloads WHERE txn_id = ?1",
            [id],
            |row| {
                Ok(SealedPayload {
                    digest: row.get(0)?,
                    envelope: row.get(1)?,
                    signature: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(sealed)
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<TransactionRecord> {
    Ok(TransactionRecord {
        id: row.get(0)?,
        from_acct: row.get(1)?,
        to_acct: row.get(2)?,
        amount: row.get(3)?,
        currency: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
