//! AggieSource Frontend App
//!
//! Page bootstrap. Every page loads the same bundle; each feature mounts only
//! where the page provides its mount element.

use leptos::mount::mount_to;
use leptos::prelude::*;
use aggiesource_core::storage::seed_defaults;

use crate::auth;
use crate::components::{
    AdminChecklists, AdminInventory, AdminPickupRequests, AdminSlots, DonationsPage,
    StudentInventory, StudentPickup, VolunteerTools,
};
use crate::context::AppContext;
use crate::dom;
use crate::storage::LocalStore;

/// Seed storage, bind the auth forms and mount every feature present on this page.
pub fn boot() {
    if let Err(err) = seed_defaults(&LocalStore) {
        log::error!("[APP] Seeding failed: {}", err);
    }

    auth::bind_access_gate();
    auth::bind_sign_in();
    auth::bind_sign_up();
    auth::bind_nav_toggle();

    mount_feature("admin-inventory-mount", AdminInventory);
    mount_feature("admin-slots-mount", AdminSlots);
    mount_feature("admin-checklists-mount", AdminChecklists);
    mount_feature("admin-pickup-requests-mount", AdminPickupRequests);
    mount_feature("student-inventory-mount", StudentInventory);
    mount_feature("student-pickup-mount", StudentPickup);
    mount_feature("volunteer-tools-mount", VolunteerTools);
    mount_feature("donations-mount", DonationsPage);
}

/// Mount `view` into `#id` with its own context; no-op when the page lacks it.
fn mount_feature<F, N>(id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let Some(parent) = dom::html_element_by_id(id) else {
        return;
    };
    log::debug!("[APP] Mounting #{}", id);
    mount_to(parent, move || {
        provide_context(AppContext::new());
        view()
    })
    .forget();
}
