//! Key-value backends for preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference store only needs string get/set over two keys. Browser
//! `localStorage` glue is hydrate-only; native builds (tests, SSR) see an
//! unavailable store and fall back to in-memory session values.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PrefsError;

/// Durable string key-value store.
pub trait KeyValueBackend {
    /// Read `key`. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PrefsError::StorageUnavailable)
}

impl KeyValueBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| PrefsError::StorageRead {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PrefsError::StorageUnavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| PrefsError::StorageWrite {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PrefsError::StorageUnavailable)
        }
    }
}

/// In-process map. Clones share the same entries, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded backend, as if a previous session had written these keys.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Rc::new(RefCell::new(map)) }
    }

    /// Raw stored string for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A backend that is never available, e.g. storage disabled by the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableBackend;

impl KeyValueBackend for UnavailableBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Err(PrefsError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Err(PrefsError::StorageUnavailable)
    }
}
