// src/config/app.rs
use super::defaults::*;
use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
use crate::CoreResult as Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub ledger_db: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config — loaded once, falls back to defaults if missing or broken
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if !Path::new(&config_path).exists() {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        match Config::from_path(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(path = %config_path, error = %err, "unusable config file, using built-in defaults");
                Config::default()
            }
        }
    })
}
