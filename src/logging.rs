// src/logging.rs
//! Optional tracing subscriber setup (feature `logging`)

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber; `RUST_LOG` wins over the configured filter
///
/// Idempotent — later calls are ignored once a subscriber is installed.
pub fn init() {
    init_with_filter(&crate::config::load().logging.filter);
}

pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
