// src/db/record.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A micro-transaction row
///
/// `id`, `created_at` and `updated_at` are assigned by
/// [`create_transaction`](super::create_transaction); whatever the caller
/// puts there beforehand is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub from_acct: String,
    pub to_acct: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// A fresh, not-yet-stored record
    pub fn new(
        from_acct: impl Into<String>,
        to_acct: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            from_acct: from_acct.into(),
            to_acct: to_acct.into(),
            amount,
            currency: currency.into(),
            status: status.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Signed + encrypted form of a record, stored as opaque text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedPayload {
    /// SHA-256 of the serialized record, lowercase hex
    pub digest: String,
    /// base64 `IV || AES-256-CFB ciphertext`
    pub envelope: String,
    /// base64 PKCS#1 v1.5 signature
    pub signature: String,
}
