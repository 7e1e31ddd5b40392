//! Feature Services
//!
//! One service per page feature. Each borrows the store, reads the whole
//! collection, applies a transition and writes it back. Nothing is cached
//! between calls, so two services over the same store always agree.

mod inventory;
mod slots;
mod checklists;
mod donations;
mod cart;
mod pickup;
mod volunteer;
mod calendar;
mod auth;

pub use inventory::InventoryService;
pub use slots::SlotService;
pub use checklists::ChecklistService;
pub use donations::DonationService;
pub use cart::CartService;
pub use pickup::PickupService;
pub use volunteer::{ChecklistEntry, ChecklistView, VolunteerService, VolunteerSummary};
pub use calendar::{monthly_calendar, MonthSummary};
pub use auth::{check_signup_email, sign_in, sign_up, SignIn, SignUp, SignUpOutcome};
