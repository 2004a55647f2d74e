//! File system repository

use crate::domain::{is_valid_key, KeyValueStore};
use crate::error::{GoodThingsError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Load configuration from .goodthings/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .goodthings/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .goodthings directory exists
    fn is_initialized(&self) -> bool;

    /// Create .goodthings directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository.
///
/// Also serves as the durable key-value store: each key is a
/// `.goodthings/<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks GOODTHINGS_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("GOODTHINGS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(GoodThingsError::Config(format!(
                    "GOODTHINGS_ROOT is set to '{}' but no .goodthings directory found. \
                    Run 'goodthings init' in that directory or unset GOODTHINGS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(GoodThingsError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    /// Path of the file holding `key`
    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(GoodThingsError::Config(format!(
                "Invalid storage key: '{}'. Keys may only contain letters, digits, '_' and '-'",
                key
            )));
        }
        Ok(self.root.join(JOURNAL_DIR).join(format!("{}.json", key)))
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(GoodThingsError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        Ok(())
    }
}

impl KeyValueStore for FileSystemRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GoodThingsError::Io(e)),
        }
    }

    /// Best-effort atomic replace: write a temp file in the same directory,
    /// then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!(
            "{}.json.goodthings-tmp-{}",
            key,
            std::process::id()
        ));
        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GoodThingsError::Io(e)),
        }
    }
}
