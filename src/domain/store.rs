//! Entry store: the ordered entry sequence, the edit cursor, and the
//! snapshot mirror kept in a key-value slot.
//!
//! Every mutation builds the new sequence, writes it wholesale under the
//! snapshot key, and only then replaces the in-memory sequence.

use crate::domain::entry::{decode_snapshot, encode_snapshot};
use crate::domain::{format_timestamp, Clock, Entry, EntryFormat, KeyValueStore};
use crate::error::{GoodThingsError, Result};
use tracing::{debug, warn};

/// Default key holding the persisted snapshot
pub const DEFAULT_STORAGE_KEY: &str = "entries";

/// Where and how the store persists its sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub key: String,
    pub format: EntryFormat,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            key: DEFAULT_STORAGE_KEY.to_string(),
            format: EntryFormat::default(),
        }
    }
}

/// Result of a `save` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Blank input; nothing changed
    Ignored,
    /// New entry prepended at index 0
    Created,
    /// Entry at `index` replaced
    Updated { index: usize },
}

pub struct EntryStore<S, C> {
    backend: S,
    clock: C,
    settings: StoreSettings,
    entries: Vec<Entry>,
    edit_cursor: Option<usize>,
}

impl<S: KeyValueStore, C: Clock> EntryStore<S, C> {
    /// Load the sequence from the snapshot slot.
    ///
    /// A missing, unreadable, or malformed snapshot yields an empty
    /// sequence; the latter two are reported with a warning.
    pub fn load(backend: S, clock: C, settings: StoreSettings) -> Self {
        let entries = match backend.get(&settings.key) {
            Ok(Some(raw)) => match decode_snapshot(&raw) {
                Ok(entries) => {
                    debug!(key = %settings.key, count = entries.len(), "loaded snapshot");
                    entries
                }
                Err(e) => {
                    warn!(key = %settings.key, error = %e, "malformed snapshot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(key = %settings.key, "no snapshot, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %settings.key, error = %e, "could not read snapshot, starting empty");
                Vec::new()
            }
        };

        EntryStore {
            backend,
            clock,
            settings,
            entries,
            edit_cursor: None,
        }
    }

    /// Create a new entry, or update the one under the edit cursor.
    ///
    /// Blank input is ignored without touching the snapshot. A cursor that
    /// no longer points at an entry is cleared and reported as
    /// `IndexOutOfRange`.
    pub fn save(&mut self, input: &str) -> Result<SaveOutcome> {
        if input.trim().is_empty() {
            debug!("ignoring blank entry");
            return Ok(SaveOutcome::Ignored);
        }

        let entry = Entry::new(input, self.timestamp_now());

        match self.edit_cursor {
            None => {
                let mut updated = Vec::with_capacity(self.entries.len() + 1);
                updated.push(entry);
                updated.extend(self.entries.iter().cloned());
                self.commit(updated)?;
                Ok(SaveOutcome::Created)
            }
            Some(index) => {
                if index >= self.entries.len() {
                    self.edit_cursor = None;
                    return Err(self.out_of_range(index));
                }
                let mut updated = self.entries.clone();
                updated[index] = entry;
                self.commit(updated)?;
                self.edit_cursor = None;
                Ok(SaveOutcome::Updated { index })
            }
        }
    }

    /// Point the edit cursor at `index` and return that entry's text
    pub fn begin_edit(&mut self, index: usize) -> Result<&str> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        self.edit_cursor = Some(index);
        Ok(self.entries[index].text.as_str())
    }

    /// Set the edit cursor without checking it against the sequence.
    ///
    /// Used to carry a cursor over from an earlier session; a cursor that
    /// no longer points at an entry is reported by the next `save`.
    pub fn resume_edit(&mut self, index: usize) {
        self.edit_cursor = Some(index);
    }

    /// Remove the entry at `index`.
    ///
    /// The edit cursor is left as is, so after deleting an entry before it
    /// the cursor refers to the next entry down.
    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.entries[index].clone();
        let updated = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.clone())
            .collect();
        self.commit(updated)?;
        Ok(removed)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    /// Label for the submit action: "Update" while editing, else "Save"
    pub fn action_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Save"
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn timestamp_now(&self) -> Option<String> {
        if self.settings.format.has_timestamps() {
            Some(format_timestamp(&self.clock.now()))
        } else {
            None
        }
    }

    fn commit(&mut self, updated: Vec<Entry>) -> Result<()> {
        let snapshot = encode_snapshot(&updated, self.settings.format)?;
        self.backend.set(&self.settings.key, &snapshot)?;
        debug!(key = %self.settings.key, count = updated.len(), "wrote snapshot");
        self.entries = updated;
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> GoodThingsError {
        GoodThingsError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}
