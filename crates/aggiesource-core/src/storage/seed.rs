//! First-Run Seed Data
//!
//! Writes default inventory, pickup slots, checklist templates and donations
//! the first time the app runs in a browser profile. A key that already holds
//! a value, even an empty list, is left alone.

use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::domain::{ChecklistTemplate, Donation, DomainResult, InventoryItem, PickupSlot};
use super::keys;
use super::traits::{KeyValueStore, StoreExt};

/// Which keys a seeding pass wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty()
    }
}

pub fn default_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("Rice (1 lb)", 24, "Pantry"),
        InventoryItem::new("Canned Beans", 40, "Pantry"),
        InventoryItem::new("Pasta", 30, "Pantry"),
        InventoryItem::new("Toothpaste", 15, "Hygiene"),
        InventoryItem::new("Shampoo", 10, "Hygiene"),
    ]
}

pub fn default_slots() -> Vec<PickupSlot> {
    vec![
        PickupSlot::new("2026-02-02", "12:00 PM", 8),
        PickupSlot::new("2026-02-02", "2:00 PM", 8),
        PickupSlot::new("2026-02-03", "10:00 AM", 8),
    ]
}

pub fn default_checklists() -> Vec<ChecklistTemplate> {
    vec![ChecklistTemplate::new(
        "Pantry Shift Checklist",
        vec![
            "Stock shelves".to_string(),
            "Organize donations".to_string(),
            "Wipe down surfaces".to_string(),
            "Update inventory notes".to_string(),
        ],
    )]
}

pub fn default_donations() -> Vec<Donation> {
    vec![Donation::new("Campus Partner", "Canned goods", "Scheduled", "2026-02-01")]
}

/// Seed every defaulted collection whose key is absent.
pub fn seed_defaults<S: KeyValueStore + ?Sized>(store: &S) -> DomainResult<SeedReport> {
    let mut report = SeedReport::default();
    seed_if_absent(store, keys::INVENTORY, default_inventory, &mut report)?;
    seed_if_absent(store, keys::PICKUP_SLOTS, default_slots, &mut report)?;
    seed_if_absent(store, keys::CHECKLISTS, default_checklists, &mut report)?;
    seed_if_absent(store, keys::DONATIONS, default_donations, &mut report)?;

    if !report.is_empty() {
        log::info!("[SEED] Wrote defaults for {:?}", report.seeded);
    }
    Ok(report)
}

fn seed_if_absent<S, T>(
    store: &S,
    key: &'static str,
    defaults: fn() -> Vec<T>,
    report: &mut SeedReport,
) -> DomainResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    if store.get_opt::<Vec<T>>(key).is_none() {
        store.set(key, &defaults())?;
        report.seeded.push(key);
    }
    Ok(())
}
