//! Domain Layer
//!
//! Records persisted in the browser store, plus the form rules that build them.
//! This layer knows nothing about where records are stored.

mod error;
mod input;
mod inventory;
mod pickup;
mod checklist;
mod donation;
mod volunteer;
mod role;

pub use error::{DomainError, DomainResult};
pub use input::{parse_count, required, split_items};
pub use inventory::InventoryItem;
pub use pickup::{PickupRequest, PickupSlot};
pub use checklist::{ChecklistTemplate, Completion};
pub use donation::Donation;
pub use volunteer::{elapsed_minutes, minutes_to_hours, ActiveShift, VolunteerLog};
pub use role::{Role, STAFF_EMAIL_SUFFIX, STUDENT_EMAIL_SUFFIX};
