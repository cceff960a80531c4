use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ArchiverError, Result};

pub const CONFIG_FILE_NAME: &str = "instapaper_config.json";

/// Instapaper API credentials, read once per run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub username: String,
    /// Some accounts have no password.
    #[serde(default)]
    pub password: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArchiverError::ConfigMissing(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path).map_err(|source| ArchiverError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Config::from_json(&raw).map_err(|source| ArchiverError::ConfigInvalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Config> {
        serde_json::from_str(raw)
    }
}

/// `instapaper_config.json` next to the running executable, falling back to
/// the working directory when the executable path is unavailable.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
