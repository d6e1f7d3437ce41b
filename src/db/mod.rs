// src/db/mod.rs
//! Transaction persistence on SQLite
pub mod ledger_db_conn;
pub mod ledger_db_ops;
pub mod record;

pub use ledger_db_conn::{migrate, open_ledger_db, open_ledger_db_at, open_ledger_db_in_memory};
pub use ledger_db_ops::{
    create_transaction, get_transaction, load_sealed_payload, store_sealed_payload,
};
pub use record::{SealedPayload, TransactionRecord};
