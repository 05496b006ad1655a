//! Key-value persistence boundary for the registry collections.
//!
//! The registry only needs whole-value get/set of string payloads, so the
//! backing store is abstracted behind a small trait: the browser's
//! localStorage in the app, an in-memory map in tests.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage is missing or blocked by the browser.
    Unavailable,
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "browser storage is unavailable"),
            StorageError::WriteFailed(key) => write!(f, "could not persist '{}'", key),
        }
    }
}

pub trait KeyValueStore {
    /// Missing keys and read failures both surface as `None`; the registry
    /// treats them as an empty collection.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (*self).set(key, value)
    }
}

/// localStorage-backed store used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let store = web_sys::window()?.local_storage().ok()??;
        store.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let store = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        store
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
