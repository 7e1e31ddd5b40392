//! Typed Collections
//!
//! A JSON array stored under one key. Records have no ids: position is identity,
//! so removing an entry shifts every later index down by one.

use std::marker::PhantomData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::domain::{DomainError, DomainResult};
use super::traits::{KeyValueStore, StoreExt};

/// Read-modify-write access to a stored `Vec<T>`
pub struct Collection<'a, S: ?Sized, T> {
    store: &'a S,
    key: String,
    /// Noun used in errors, e.g. "inventory item"
    what: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, S, T> Collection<'a, S, T>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: &'a S, key: impl Into<String>, what: &'static str) -> Self {
        Self {
            store,
            key: key.into(),
            what,
            _marker: PhantomData,
        }
    }

    /// Current contents; empty when absent or unreadable
    pub fn load(&self) -> Vec<T> {
        self.store.get_or(&self.key, Vec::new())
    }

    pub fn save(&self, items: &[T]) -> DomainResult<()> {
        self.store.set(&self.key, items)
    }

    /// Load, transform, and save only if the transform succeeds.
    ///
    /// Fails without writing when the stored array cannot be decoded.
    pub fn apply<R>(&self, f: impl FnOnce(&mut Vec<T>) -> DomainResult<R>) -> DomainResult<R> {
        let mut items = self.store.try_get::<Vec<T>>(&self.key)?.unwrap_or_default();
        let out = f(&mut items)?;
        self.save(&items)?;
        Ok(out)
    }

    /// Append and return the new length
    pub fn push(&self, item: T) -> DomainResult<usize> {
        self.apply(|items| {
            items.push(item);
            Ok(items.len())
        })
    }

    pub fn remove_at(&self, index: usize) -> DomainResult<T> {
        let what = self.what;
        self.apply(|items| {
            if index < items.len() {
                Ok(items.remove(index))
            } else {
                Err(DomainError::NotFound { what, index })
            }
        })
    }

    pub fn update_at<R>(&self, index: usize, f: impl FnOnce(&mut T) -> R) -> DomainResult<R> {
        let what = self.what;
        self.apply(|items| {
            items
                .get_mut(index)
                .map(f)
                .ok_or(DomainError::NotFound { what, index })
        })
    }

    pub fn clear(&self) -> DomainResult<()> {
        self.save(&[])
    }
}
