//! Persisted key names.
//!
//! Versioned so a future schema change can move to `_v2` without reading old data.

pub const INVENTORY: &str = "aggiesource_inventory_v1";
pub const PICKUP_SLOTS: &str = "aggiesource_pickup_slots_v1";
pub const CHECKLISTS: &str = "aggiesource_checklists_v1";
pub const DONATIONS: &str = "aggiesource_donations_v1";
pub const PICKUP_REQUESTS: &str = "aggiesource_pickup_requests_v1";
pub const VOLUNTEER_LOGS: &str = "aggiesource_volunteer_logs_v1";
pub const ACTIVE_SHIFT: &str = "aggiesource_active_shift_v1";
pub const CART: &str = "aggiesource_cart_v1";

/// Checklist progress for one calendar day (`YYYY-MM-DD`)
pub fn checklist_progress(date: &str) -> String {
    format!("aggiesource_checklist_progress_{}_v1", date)
}
