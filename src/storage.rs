//! Browser Store
//!
//! `localStorage` behind the core `KeyValueStore` trait.

use aggiesource_core::{DomainError, DomainResult, KeyValueStore};

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> DomainResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| DomainError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("could not write {}: {:?}", key, e)))
    }
}
