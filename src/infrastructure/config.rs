//! Configuration management

use crate::domain::{
    is_valid_key, EntryFormat, StoreSettings, DEFAULT_STORAGE_KEY, EDIT_CURSOR_KEY,
};
use crate::error::{GoodThingsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory marking a journal root
pub const JOURNAL_DIR: &str = ".goodthings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: EntryFormat,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new(EntryFormat::default())
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new(format: EntryFormat) -> Self {
        Config {
            format,
            storage_key: default_storage_key(),
        }
    }

    /// Load config from .goodthings/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GoodThingsError::NotJournalDirectory(path.to_path_buf())
            } else {
                GoodThingsError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| GoodThingsError::Config(format!("Failed to parse config.toml: {}", e)))?;
        Self::validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Reject keys that cannot name a slot or that collide with the edit cursor
    pub fn validate_storage_key(key: &str) -> Result<()> {
        if key == EDIT_CURSOR_KEY {
            return Err(GoodThingsError::Config(format!(
                "Storage key '{}' is reserved",
                key
            )));
        }
        if !is_valid_key(key) {
            return Err(GoodThingsError::Config(format!(
                "Invalid storage key: '{}'. Keys may only contain letters, digits, '_' and '-'",
                key
            )));
        }
        Ok(())
    }

    /// Save config to .goodthings/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Settings the entry store is opened with
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            key: self.storage_key.clone(),
            format: self.format,
        }
    }
}
