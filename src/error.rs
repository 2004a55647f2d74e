//! Error types for goodthings

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the goodthings journal
#[derive(Debug, Error)]
pub enum GoodThingsError {
    #[error("Not a goodthings directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("No entry at index {index} (journal has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl GoodThingsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GoodThingsError::NotJournalDirectory(_) => 2,
            GoodThingsError::IndexOutOfRange { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GoodThingsError::NotJournalDirectory(path) => {
                format!(
                    "Not a goodthings directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'goodthings init' in this directory to start a journal\n\
                    • Navigate to an existing goodthings directory\n\
                    • Set GOODTHINGS_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            GoodThingsError::IndexOutOfRange { index, len } => {
                let valid = if *len == 0 {
                    "The journal is empty; add one with: goodthings save <text>".to_string()
                } else {
                    format!("Valid indexes: 0..={}", len - 1)
                };
                format!(
                    "No entry at index {}\n\n\
                    {}\n\
                    Use 'goodthings list' to see entry indexes",
                    index, valid
                )
            }
            GoodThingsError::Config(msg) => {
                if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: stamped, plain\n\
                        Example: goodthings config format plain",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GoodThingsError
pub type Result<T> = std::result::Result<T, GoodThingsError>;
