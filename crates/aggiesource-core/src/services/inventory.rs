//! Inventory Service
//!
//! Admin editing of the inventory table and the student in-stock view.

use crate::domain::{parse_count, DomainResult, InventoryItem};
use crate::storage::{keys, Collection, KeyValueStore};

pub struct InventoryService<'a, S: ?Sized> {
    items: Collection<'a, S, InventoryItem>,
}

impl<'a, S: KeyValueStore + ?Sized> InventoryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            items: Collection::new(store, keys::INVENTORY, "inventory item"),
        }
    }

    pub fn list(&self) -> Vec<InventoryItem> {
        self.items.load()
    }

    /// Items students may request: quantity above zero, in stored order
    pub fn in_stock(&self) -> Vec<InventoryItem> {
        self.list().into_iter().filter(InventoryItem::in_stock).collect()
    }

    /// Validate the add-row form and append the item.
    pub fn add(&self, category: &str, name: &str, qty: &str) -> DomainResult<InventoryItem> {
        let item = InventoryItem::from_form(category, name, qty)?;
        self.items.push(item.clone())?;
        log::debug!("[INVENTORY] Added {} ({})", item.name, item.qty);
        Ok(item)
    }

    /// Commit an inline quantity edit; unparsable input stores 0.
    pub fn set_quantity(&self, index: usize, raw: &str) -> DomainResult<u32> {
        let qty = parse_count(raw);
        self.items.update_at(index, |item| item.qty = qty)?;
        Ok(qty)
    }

    pub fn remove(&self, index: usize) -> DomainResult<InventoryItem> {
        let removed = self.items.remove_at(index)?;
        log::debug!("[INVENTORY] Removed {}", removed.name);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_in_stock_hides_empty_shelves() {
        let store = MemoryStore::new();
        let inventory = InventoryService::new(&store);
        inventory.add("Pantry", "Oats", "5").unwrap();
        inventory.add("Pantry", "Flour", "0").unwrap();
        inventory.add("Hygiene", "Soap", "2").unwrap();

        let names: Vec<_> = inventory.in_stock().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Oats", "Soap"]);
        assert_eq!(inventory.list().len(), 3);
    }

    #[test]
    fn test_set_quantity_by_index() {
        let store = MemoryStore::new();
        let inventory = InventoryService::new(&store);
        inventory.add("Pantry", "Oats", "5").unwrap();
        inventory.add("Pantry", "Rice", "5").unwrap();

        assert_eq!(inventory.set_quantity(1, "12").unwrap(), 12);
        assert_eq!(inventory.set_quantity(0, "oops").unwrap(), 0);
        let items = inventory.list();
        assert_eq!((items[0].qty, items[1].qty), (0, 12));
    }

    #[test]
    fn test_failed_add_does_not_write() {
        let store = MemoryStore::new();
        let inventory = InventoryService::new(&store);
        assert!(inventory.add("", "Oats", "5").is_err());
        assert!(!store.contains(keys::INVENTORY));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let inventory = InventoryService::new(&store);
        inventory.add("Pantry", "Oats", "5").unwrap();
        assert_eq!(inventory.remove(0).unwrap().name, "Oats");
        assert!(inventory.list().is_empty());
        assert!(inventory.remove(0).is_err());
    }
}
