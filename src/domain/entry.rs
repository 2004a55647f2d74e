//! Journal entries and their snapshot encoding

use crate::domain::EntryFormat;
use serde::{Deserialize, Serialize};

/// One journaled good thing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    /// Display timestamp of creation or last update; `None` for plain entries
    pub timestamp: Option<String>,
}

impl Entry {
    pub fn new(text: impl Into<String>, timestamp: Option<String>) -> Self {
        Entry {
            text: text.into(),
            timestamp,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Entry::new(text, None)
    }

    pub fn stamped(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Entry::new(text, Some(timestamp.into()))
    }
}

/// On-disk element shape. Both shapes may appear in the same array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Plain(String),
    Stamped {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
    },
}

impl From<StoredEntry> for Entry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Plain(text) => Entry::plain(text),
            StoredEntry::Stamped { text, timestamp } => Entry::new(text, timestamp),
        }
    }
}

impl StoredEntry {
    fn from_entry(entry: &Entry, format: EntryFormat) -> Self {
        match format {
            EntryFormat::Plain => StoredEntry::Plain(entry.text.clone()),
            EntryFormat::Stamped => StoredEntry::Stamped {
                text: entry.text.clone(),
                timestamp: entry.timestamp.clone(),
            },
        }
    }
}

/// Serialize the whole sequence as a JSON array in the given format
pub fn encode_snapshot(entries: &[Entry], format: EntryFormat) -> serde_json::Result<String> {
    let stored: Vec<StoredEntry> = entries
        .iter()
        .map(|e| StoredEntry::from_entry(e, format))
        .collect();
    serde_json::to_string(&stored)
}

/// Parse a snapshot written in either format
pub fn decode_snapshot(raw: &str) -> serde_json::Result<Vec<Entry>> {
    let stored: Vec<StoredEntry> = serde_json::from_str(raw)?;
    Ok(stored.into_iter().map(Entry::from).collect())
}
