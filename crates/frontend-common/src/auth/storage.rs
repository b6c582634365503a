//! Durable key-value slots backing the session

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Storage;

/// String slots that survive a page reload
///
/// Writes never fail from the caller's point of view: a browser that
/// refuses the write (quota, private mode) only loses persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Window `localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "localStorage rejected write");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable, value not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process slots; clones share the same map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_slots() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("sales-token", "abc");
        assert_eq!(other.get("sales-token").as_deref(), Some("abc"));

        other.remove("sales-token");
        assert!(!storage.contains("sales-token"));
        assert_eq!(storage.get("sales-token"), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("k", "1");
        storage.set("k", "2");
        assert_eq!(storage.get("k").as_deref(), Some("2"));
    }
}
