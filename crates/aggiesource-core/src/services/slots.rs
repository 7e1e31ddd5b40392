//! Pickup Slot Service

use crate::domain::{parse_count, DomainResult, PickupSlot};
use crate::storage::{keys, Collection, KeyValueStore};

pub struct SlotService<'a, S: ?Sized> {
    slots: Collection<'a, S, PickupSlot>,
}

impl<'a, S: KeyValueStore + ?Sized> SlotService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            slots: Collection::new(store, keys::PICKUP_SLOTS, "pickup slot"),
        }
    }

    pub fn list(&self) -> Vec<PickupSlot> {
        self.slots.load()
    }

    pub fn add(&self, date: &str, time: &str, capacity: &str) -> DomainResult<PickupSlot> {
        let slot = PickupSlot::from_form(date, time, capacity)?;
        self.slots.push(slot.clone())?;
        log::debug!("[SLOTS] Added {}", slot.label());
        Ok(slot)
    }

    pub fn set_capacity(&self, index: usize, raw: &str) -> DomainResult<u32> {
        let capacity = parse_count(raw);
        self.slots.update_at(index, |slot| slot.capacity = capacity)?;
        Ok(capacity)
    }

    pub fn remove(&self, index: usize) -> DomainResult<PickupSlot> {
        self.slots.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_edit_remove() {
        let store = MemoryStore::new();
        let slots = SlotService::new(&store);
        slots.add("2026-03-01", "9:00 AM", "4").unwrap();
        slots.add("2026-03-02", "1:30 PM", "x").unwrap();
        assert_eq!(slots.list()[1].capacity, 0);

        slots.set_capacity(1, "6").unwrap();
        assert_eq!(slots.list()[1].capacity, 6);

        let removed = slots.remove(0).unwrap();
        assert_eq!(removed.date, "2026-03-01");
        assert_eq!(slots.list(), vec![PickupSlot::new("2026-03-02", "1:30 PM", 6)]);
    }

    #[test]
    fn test_add_requires_date_and_time() {
        let store = MemoryStore::new();
        let slots = SlotService::new(&store);
        let err = slots.add("", "9:00 AM", "4").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a date and time.");
        assert!(slots.list().is_empty());
    }
}
