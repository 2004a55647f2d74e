//! Save, edit, delete, and list use cases

use crate::domain::{
    Clock, Entry, EntryStore, KeyValueStore, SaveOutcome, StoreSettings, SystemClock,
    EDIT_CURSOR_KEY,
};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use tracing::warn;

/// Entry store plus the edit cursor kept in its own slot
pub struct JournalService<S: KeyValueStore, C: Clock> {
    store: EntryStore<S, C>,
}

impl JournalService<FileSystemRepository, SystemClock> {
    /// Open the journal in `repository` with its configured settings
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        Ok(Self::with_backend(
            repository,
            SystemClock,
            config.store_settings(),
        ))
    }
}

impl<S: KeyValueStore, C: Clock> JournalService<S, C> {
    pub fn with_backend(backend: S, clock: C, settings: StoreSettings) -> Self {
        let mut store = EntryStore::load(backend, clock, settings);

        match store.backend().get(EDIT_CURSOR_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<usize>(raw.trim()) {
                Ok(index) => store.resume_edit(index),
                Err(e) => {
                    warn!(value = %raw, error = %e, "discarding malformed edit cursor");
                    if let Err(e) = store.backend_mut().remove(EDIT_CURSOR_KEY) {
                        warn!(error = %e, "could not remove edit cursor");
                    }
                }
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read edit cursor"),
        }

        JournalService { store }
    }

    /// Create or update an entry
    pub fn save(&mut self, text: &str) -> Result<SaveOutcome> {
        let before = self.store.edit_cursor();
        let outcome = self.store.save(text);
        if self.store.edit_cursor() != before {
            self.persist_cursor()?;
        }
        outcome
    }

    /// Start editing the entry at `index`, returning its current text
    pub fn begin_edit(&mut self, index: usize) -> Result<String> {
        let text = self.store.begin_edit(index)?.to_string();
        self.persist_cursor()?;
        Ok(text)
    }

    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        self.store.delete(index)
    }

    pub fn store(&self) -> &EntryStore<S, C> {
        &self.store
    }

    fn persist_cursor(&mut self) -> Result<()> {
        match self.store.edit_cursor() {
            Some(index) => self
                .store
                .backend_mut()
                .set(EDIT_CURSOR_KEY, &index.to_string()),
            None => self.store.backend_mut().remove(EDIT_CURSOR_KEY),
        }
    }
}
