//! Cross-Feature Scenarios
//!
//! Several services sharing one in-memory store, the way pages share
//! `localStorage` in the browser.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crate::services::{
        check_signup_email, sign_up, CartService, InventoryService, PickupService, SignUp,
        SlotService, VolunteerService,
    };
    use crate::storage::{keys, seed_defaults, MemoryStore, StoreExt};
    use crate::domain::{DomainError, InventoryItem};

    #[test]
    fn test_cart_keeps_entries_after_item_removed() {
        let store = MemoryStore::new();
        seed_defaults(&store).unwrap();
        let inventory = InventoryService::new(&store);
        let cart = CartService::new(&store);

        inventory.add("Pantry", "Oats", "5").unwrap();
        let visible = inventory.in_stock();
        let oats = visible.iter().find(|i| i.name == "Oats").unwrap();
        assert_eq!(oats, &InventoryItem::new("Oats", 5, "Pantry"));

        cart.add(&oats.name).unwrap();
        cart.add(&oats.name).unwrap();
        assert_eq!(cart.list(), vec!["Oats", "Oats"]);
        // Stock is untouched by the cart
        assert_eq!(inventory.in_stock().iter().find(|i| i.name == "Oats").unwrap().qty, 5);

        let index = inventory.list().iter().position(|i| i.name == "Oats").unwrap();
        inventory.remove(index).unwrap();
        assert!(inventory.list().iter().all(|i| i.name != "Oats"));
        assert_eq!(cart.list(), vec!["Oats", "Oats"]);
    }

    #[test]
    fn test_request_survives_slot_removal() {
        let store = MemoryStore::new();
        let slots = SlotService::new(&store);
        let pickup = PickupService::new(&store);
        let now = Utc.with_ymd_and_hms(2026, 2, 25, 16, 45, 10).unwrap();

        slots.add("2026-03-01", "9:00 AM", "4").unwrap();
        pickup.request(Some(0), "Picking up for roommate", now).unwrap();

        let requests = pickup.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].slot.date, "2026-03-01");
        assert_eq!(requests[0].slot.time, "9:00 AM");
        assert_eq!(requests[0].notes, "Picking up for roommate");

        slots.remove(0).unwrap();
        assert!(slots.list().is_empty());
        assert_eq!(pickup.requests(), requests);
    }

    #[test]
    fn test_slot_edit_does_not_propagate() {
        let store = MemoryStore::new();
        let slots = SlotService::new(&store);
        let pickup = PickupService::new(&store);
        slots.add("2026-03-01", "9:00 AM", "4").unwrap();
        pickup.request(Some(0), "", Utc::now()).unwrap();

        slots.set_capacity(0, "0").unwrap();
        assert_eq!(pickup.requests()[0].slot.capacity, 4);
    }

    #[test]
    fn test_student_signup_gate() {
        let blocked = check_signup_email("student", "jdoe@gmail.com");
        assert!(matches!(blocked, Err(DomainError::AccessDenied(_))));

        check_signup_email("student", "jdoe@aggies.ncat.edu").unwrap();
        let outcome = sign_up(SignUp {
            role: "student",
            email: "jdoe@aggies.ncat.edu",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(outcome.target, Some("student.html"));
    }

    #[test]
    fn test_volunteer_round_trip_clears_shift() {
        let store = MemoryStore::new();
        seed_defaults(&store).unwrap();
        let volunteer = VolunteerService::new(&store);
        let now = Utc::now();

        volunteer.check_in("Saturday", "Food drive", now).unwrap();
        assert!(volunteer.checklist().is_some());
        let log = volunteer.check_out(now).unwrap();

        assert!(log.minutes >= 1);
        assert_eq!(volunteer.logs().len(), 1);
        assert!(store.get_opt::<serde_json::Value>(keys::ACTIVE_SHIFT).is_none());
        assert!(volunteer.checklist().is_none());
    }

    #[test]
    fn test_admin_empties_inventory_then_reload() {
        let store = MemoryStore::new();
        seed_defaults(&store).unwrap();
        let inventory = InventoryService::new(&store);
        while !inventory.list().is_empty() {
            inventory.remove(0).unwrap();
        }

        // Next page load seeds again but must leave the emptied list alone
        seed_defaults(&store).unwrap();
        assert!(inventory.list().is_empty());
        assert!(inventory.in_stock().is_empty());
    }
}
