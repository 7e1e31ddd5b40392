//! Sign-In / Sign-Up Pages
//!
//! These pages are plain HTML forms; listeners are attached directly to the
//! existing elements rather than rendered through Leptos.

use aggiesource_core::services::{check_signup_email, sign_in, sign_up, SignIn, SignUp};

use crate::dom::{self, element_by_id, field_value};

fn all_present(ids: &[&str]) -> bool {
    ids.iter().all(|id| element_by_id(id).is_some())
}

/// Block signups whose email does not match the role's domain.
///
/// Runs in the capture phase and stops immediate propagation, so the signup
/// handler below never sees a rejected click.
pub fn bind_access_gate() {
    if !all_present(&["signup-role", "signup-email"]) {
        return;
    }
    let Some(button) = element_by_id("signup-button") else {
        return;
    };
    dom::on_click(&button, true, |ev| {
        let role = field_value("signup-role");
        if let Err(err) = check_signup_email(&role, &field_value("signup-email")) {
            ev.prevent_default();
            ev.stop_immediate_propagation();
            log::info!("[AUTH] Signup blocked for role {}", role);
            dom::alert(&err.to_string());
        }
    });
}

pub fn bind_sign_in() {
    if !all_present(&["signin-view", "signin-email", "signin-password"]) {
        return;
    }
    let Some(button) = element_by_id("signin-button") else {
        return;
    };
    dom::on_click(&button, false, |_| {
        let view = field_value("signin-view");
        let email = field_value("signin-email");
        let password = field_value("signin-password");
        match sign_in(SignIn { view: &view, email: &email, password: &password }) {
            Ok(Some(page)) => dom::redirect(page),
            Ok(None) => log::warn!("[AUTH] No landing page for view {:?}", view),
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}

pub fn bind_sign_up() {
    if !all_present(&["signup-role", "signup-email", "signup-password"]) {
        return;
    }
    let Some(button) = element_by_id("signup-button") else {
        return;
    };
    dom::on_click(&button, false, |_| {
        let role = field_value("signup-role");
        let email = field_value("signup-email");
        let password = field_value("signup-password");
        match sign_up(SignUp { role: &role, email: &email, password: &password }) {
            Ok(outcome) => {
                dom::alert(&outcome.message);
                if let Some(page) = outcome.target {
                    dom::redirect(page);
                }
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}

/// Mobile nav: the toggle button opens and closes the main nav.
pub fn bind_nav_toggle() {
    let (Some(toggle), Some(nav)) = (element_by_id("nav-toggle"), element_by_id("main-nav")) else {
        return;
    };
    dom::on_click(&toggle, false, move |_| {
        if let Err(e) = nav.class_list().toggle("open") {
            log::warn!("[NAV] Could not toggle menu: {:?}", e);
        }
    });
}
