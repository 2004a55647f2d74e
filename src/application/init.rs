//! Initialize journal use case

use crate::domain::EntryFormat;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, format: EntryFormat) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(format))?;
    info!(root = %path.display(), %format, "initialized journal");

    println!("Initialized goodthings journal at {}", path.display());
    println!("Format: {}", format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a").join("b");

        init(&root, EntryFormat::Plain).unwrap();

        let config = Config::load_from_dir(&root).unwrap();
        assert_eq!(config.format, EntryFormat::Plain);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), EntryFormat::Stamped).unwrap();
        assert!(init(temp.path(), EntryFormat::Stamped).is_err());
    }
}
