// src/config/mod.rs
//! Configuration system for microtx-ledger
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Logging, Paths};
pub use defaults::default_ledger_db;

mod app;
mod defaults;
