//! Storage Layer - Core Traits
//!
//! Defines the abstract interface for the browser-scoped key-value store.
//! Implementations can use `localStorage`, in-memory maps, etc.

use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::domain::{DomainError, DomainResult};

/// Raw string key-value store.
///
/// Single-threaded by contract: implementations may use interior mutability
/// and need not be `Sync`.
pub trait KeyValueStore {
    /// Stored text under `key`, or `None` if never written
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Overwrite `key` unconditionally
    fn set_raw(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Typed JSON access on top of any [`KeyValueStore`]
pub trait StoreExt: KeyValueStore {
    /// Decode the value under `key`.
    ///
    /// Absent keys, empty text, a stored `null` and undecodable text all
    /// yield `None`. Decode failures are logged and otherwise masked.
    fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[STORE] Discarding unreadable value under {}: {}", key, e);
                None
            }
        }
    }

    /// Decode the value under `key`, failing on text that does not decode.
    ///
    /// Absent keys, empty text and a stored `null` are `Ok(None)`. Writers
    /// read through this so unreadable data is never overwritten.
    fn try_get<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        let Some(raw) = self.get_raw(key) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<T>>(&raw)
            .map_err(|e| DomainError::Storage(format!("unreadable data under {}: {}", key, e)))
    }

    /// Decode the value under `key`, or return `fallback`.
    fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.get_opt(key).unwrap_or(fallback)
    }

    /// Encode `value` as JSON and overwrite `key`.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
