//! Pickup Requests
//!
//! Students pick one of the admin's slots; admins review and delete requests.
//! Requests copy the slot, and capacity is never checked or consumed.

use chrono::{DateTime, Utc};
use crate::domain::{DomainError, DomainResult, PickupRequest, PickupSlot};
use crate::storage::{keys, Collection, KeyValueStore};

pub struct PickupService<'a, S: ?Sized> {
    slots: Collection<'a, S, PickupSlot>,
    requests: Collection<'a, S, PickupRequest>,
}

impl<'a, S: KeyValueStore + ?Sized> PickupService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            slots: Collection::new(store, keys::PICKUP_SLOTS, "pickup slot"),
            requests: Collection::new(store, keys::PICKUP_REQUESTS, "pickup request"),
        }
    }

    /// Slots offered in the student picker, by index
    pub fn slots(&self) -> Vec<PickupSlot> {
        self.slots.load()
    }

    pub fn requests(&self) -> Vec<PickupRequest> {
        self.requests.load()
    }

    /// Record a request for the slot at `selection`.
    pub fn request(
        &self,
        selection: Option<usize>,
        notes: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<PickupRequest> {
        let index = selection.ok_or(DomainError::MissingInput("Please choose a pickup slot."))?;
        let slot = self
            .slots()
            .into_iter()
            .nth(index)
            .ok_or(DomainError::NotFound { what: "pickup slot", index })?;

        let request = PickupRequest::new(slot, notes, now);
        self.requests.push(request.clone())?;
        log::debug!("[PICKUP] Requested {}", request.slot.label());
        Ok(request)
    }

    pub fn remove_request(&self, index: usize) -> DomainResult<PickupRequest> {
        self.requests.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SlotService;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_request_requires_selection() {
        let store = MemoryStore::new();
        let pickup = PickupService::new(&store);
        let err = pickup.request(None, "", now()).unwrap_err();
        assert_eq!(err.to_string(), "Please choose a pickup slot.");
        assert!(pickup.requests().is_empty());
    }

    #[test]
    fn test_stale_selection_is_ignored() {
        let store = MemoryStore::new();
        let pickup = PickupService::new(&store);
        let err = pickup.request(Some(0), "", now()).unwrap_err();
        assert!(!err.is_user_facing());
        assert!(!store.contains(keys::PICKUP_REQUESTS));
    }

    #[test]
    fn test_capacity_is_not_enforced() {
        let store = MemoryStore::new();
        SlotService::new(&store).add("2026-03-01", "9:00 AM", "1").unwrap();
        let pickup = PickupService::new(&store);
        pickup.request(Some(0), "first", now()).unwrap();
        pickup.request(Some(0), "second", now()).unwrap();

        assert_eq!(pickup.requests().len(), 2);
        assert_eq!(pickup.slots()[0].capacity, 1);
    }

    #[test]
    fn test_remove_request() {
        let store = MemoryStore::new();
        SlotService::new(&store).add("2026-03-01", "9:00 AM", "4").unwrap();
        let pickup = PickupService::new(&store);
        pickup.request(Some(0), "a", now()).unwrap();
        pickup.request(Some(0), "b", now()).unwrap();

        assert_eq!(pickup.remove_request(0).unwrap().notes, "a");
        assert_eq!(pickup.requests()[0].notes, "b");
    }

    #[test]
    fn test_older_request_without_timestamp_is_kept() {
        let store = MemoryStore::new();
        store
            .set_raw(keys::PICKUP_REQUESTS, r#"[{"slot":{"date":"2026-02-02","time":"2:00 PM","capacity":8},"notes":"old"}]"#)
            .unwrap();
        SlotService::new(&store).add("2026-03-01", "9:00 AM", "4").unwrap();
        let pickup = PickupService::new(&store);
        assert_eq!(pickup.requests().len(), 1);

        pickup.request(Some(0), "new", now()).unwrap();
        let requests = pickup.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].notes, "old");
        assert_eq!(requests[1].notes, "new");
    }
}
