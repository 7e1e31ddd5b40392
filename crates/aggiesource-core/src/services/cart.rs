//! Student Request Cart
//!
//! A list of item names. Entries are copies, not references: nothing here
//! looks at inventory, so the cart can hold more of an item than is in stock
//! and outlives the item's removal.

use crate::domain::DomainResult;
use crate::storage::{keys, Collection, KeyValueStore};

pub struct CartService<'a, S: ?Sized> {
    entries: Collection<'a, S, String>,
}

impl<'a, S: KeyValueStore + ?Sized> CartService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            entries: Collection::new(store, keys::CART, "cart entry"),
        }
    }

    pub fn list(&self) -> Vec<String> {
        self.entries.load()
    }

    pub fn add(&self, name: &str) -> DomainResult<usize> {
        self.entries.push(name.to_string())
    }

    pub fn remove(&self, index: usize) -> DomainResult<String> {
        self.entries.remove_at(index)
    }

    pub fn clear(&self) -> DomainResult<()> {
        self.entries.clear()
    }
}
