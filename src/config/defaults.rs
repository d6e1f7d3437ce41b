// src/config/defaults.rs
use crate::config::app::{Logging, Paths};
use crate::consts::{DEFAULT_LOG_FILTER, FALLBACK_LEDGER_DB};

pub fn default_ledger_db() -> String {
    dirs::data_local_dir()
        .map(|dir| dir.join("microtx").join("ledger.db"))
        .and_then(|path| path.to_str().map(str::to_owned))
        .unwrap_or_else(|| FALLBACK_LEDGER_DB.into())
}

pub fn default_paths() -> Paths {
    Paths {
        ledger_db: default_ledger_db(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
