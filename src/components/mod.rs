//! UI Components
//!
//! One component per page feature, plus shared pieces.

mod remove_button;
mod admin_inventory;
mod admin_slots;
mod admin_checklists;
mod admin_pickup_requests;
mod student_inventory;
mod student_pickup;
mod volunteer_tools;
mod volunteer_checklist;
mod volunteer_calendar;
mod donations_page;

pub use remove_button::RemoveButton;
pub use admin_inventory::AdminInventory;
pub use admin_slots::AdminSlots;
pub use admin_checklists::AdminChecklists;
pub use admin_pickup_requests::AdminPickupRequests;
pub use student_inventory::StudentInventory;
pub use student_pickup::StudentPickup;
pub use volunteer_tools::VolunteerTools;
pub use volunteer_checklist::VolunteerChecklist;
pub use volunteer_calendar::VolunteerCalendar;
pub use donations_page::DonationsPage;
