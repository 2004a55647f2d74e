//! Domain layer - Entries, formatting, and the entry store

pub mod entry;
pub mod format;
pub mod storage;
pub mod store;
pub mod timestamp;

pub use entry::Entry;
pub use format::EntryFormat;
pub use storage::{is_valid_key, KeyValueStore, EDIT_CURSOR_KEY};
pub use store::{EntryStore, SaveOutcome, StoreSettings, DEFAULT_STORAGE_KEY};
pub use timestamp::{format_timestamp, Clock, FixedClock, SystemClock};
