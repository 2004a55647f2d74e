//! Config management use case

use crate::domain::EntryFormat;
use crate::error::{GoodThingsError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "format" => Ok(config.format.to_string()),
            "storage_key" => Ok(config.storage_key),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "format" => {
                config.format = EntryFormat::from_str(value).map_err(GoodThingsError::Config)?;
            }
            "storage_key" => {
                Config::validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> GoodThingsError {
    GoodThingsError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: format, storage_key",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("format").unwrap(), "stamped");
        assert_eq!(service.get("storage_key").unwrap(), "entries");
    }

    #[test]
    fn test_set_format() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("format", "plain").unwrap();
        assert_eq!(service.get("format").unwrap(), "plain");
        assert_eq!(service.list().unwrap().format, EntryFormat::Plain);
    }

    #[test]
    fn test_set_invalid_format() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.set("format", "yaml").unwrap_err() {
            GoodThingsError::Config(msg) => assert!(msg.contains("Invalid format")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_storage_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("storage_key", "good-things_2").unwrap();
        assert_eq!(service.get("storage_key").unwrap(), "good-things_2");

        assert!(service.set("storage_key", "edit_cursor").is_err());
        assert!(service.set("storage_key", "../x").is_err());
        assert_eq!(service.get("storage_key").unwrap(), "good-things_2");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
