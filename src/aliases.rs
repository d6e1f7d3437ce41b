// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret containers used throughout microtx-ledger.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // 256-bit AES payload key, taken by the sealing workflow

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>); // decrypted payload, zeroized on drop
