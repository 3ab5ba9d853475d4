//! Local persistence helpers for settings.
//!
//! In the browser this is `window.localStorage`. Native builds (tests,
//! tooling) fall back to a per-thread in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("failed to write `{0}`")]
    Write(String),
}

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The platform store: `localStorage` on wasm, a thread-local map elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::default();
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        FALLBACK.with(|store| store.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        FALLBACK.with(|store| store.set(key, value))
    }
}

/// In-memory store; survives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_overwrites() {
        let store = MemoryStore::default();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_store_falls_back_to_memory_natively() {
        BrowserStore.set("probe", "1").unwrap();
        assert_eq!(BrowserStore.get("probe").as_deref(), Some("1"));
    }
}
