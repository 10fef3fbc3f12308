//! Key-value storage seam.
//!
//! The browser build persists through `localStorage`; tests and browsers that
//! refuse storage access use [`MemoryStore`]. Values are plain strings, the
//! same shape `localStorage` offers.

use std::collections::HashMap;
use std::rc::Rc;

use parking_lot::RwLock;

use crate::error::StorefrontResult;

/// String-keyed, string-valued persistent store scoped to the page origin.
///
/// Reads never fail: an unreadable slot is reported as absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> StorefrontResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
        (**self).set(key, value)
    }
}

/// In-process store. Contents vanish with the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shared_handle_sees_writes() {
        let store = Rc::new(MemoryStore::new());
        let other = Rc::clone(&store);

        other.set("navi-theme", "light").unwrap();

        assert_eq!(store.get("navi-theme").as_deref(), Some("light"));
    }
}
