//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for the plain HTML forms on the sign-in and
//! sign-up pages, plus blocking messages and navigation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent};

pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Current value of an `<input>` or `<select>`; empty if missing
pub fn field_value(id: &str) -> String {
    let Some(el) = element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Blocking message box
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full-page navigation to `page`, relative to the current one
pub fn redirect(page: &str) {
    log::info!("[NAV] Redirecting to {}", page);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(page) {
            log::error!("[NAV] Redirect to {} failed: {:?}", page, e);
        }
    }
}

/// Attach a click listener for the lifetime of the page.
///
/// With `capture` set the listener runs before bubble-phase listeners on the
/// same element and may stop them.
pub fn on_click(el: &Element, capture: bool, handler: impl FnMut(MouseEvent) + 'static) {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    if let Err(e) = el.add_event_listener_with_callback_and_bool(
        "click",
        closure.as_ref().unchecked_ref(),
        capture,
    ) {
        log::error!("[DOM] Could not bind click on #{}: {:?}", el.id(), e);
    }
    closure.forget();
}
