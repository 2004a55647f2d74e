//! Key-value storage abstraction used by the entry store

use crate::error::Result;

/// Durable string slots addressed by key
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Slot holding the edit cursor between invocations
pub const EDIT_CURSOR_KEY: &str = "edit_cursor";

/// Whether `key` is usable as a slot name: non-empty ASCII letters, digits,
/// `_` and `-`
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("entries"));
        assert!(is_valid_key("edit_cursor"));
        assert!(is_valid_key("good-things-2"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../entries"));
        assert!(!is_valid_key("a.json"));
    }
}
