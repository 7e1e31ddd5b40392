//! Student Pickup Request
//!
//! Pick one of the admin's slots and leave optional notes.

use chrono::Utc;
use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::PickupService;

use crate::context::use_app_context;
use crate::dom;

/// The slot picker's value: empty means nothing chosen
fn parse_selection(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

#[component]
pub fn StudentPickup() -> impl IntoView {
    let ctx = use_app_context();

    let (selected, set_selected) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let slots = move || {
        ctx.track();
        PickupService::new(&ctx.store()).slots()
    };

    let submit = move |_: MouseEvent| {
        let selection = parse_selection(&selected.get());
        let result = PickupService::new(&ctx.store()).request(selection, &notes.get(), Utc::now());
        if ctx.commit(result).is_some() {
            set_selected.set(String::new());
            set_notes.set(String::new());
            dom::alert("Pickup requested! (saved locally)");
        }
    };

    view! {
        <div class="card">
            <h3>"Schedule a Pickup"</h3>
            <p class="muted">"Only admin-confirmed slots are available."</p>
            <div class="form-row">
                <select
                    prop:value=selected
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                >
                    <option value="">"Choose a slot"</option>
                    {move || {
                        slots().into_iter().enumerate().map(|(idx, slot)| view! {
                            <option value=idx.to_string()>{slot.label()}</option>
                        }).collect_view()
                    }}
                </select>
                <input
                    placeholder="Notes (optional)"
                    prop:value=notes
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                />
                <button class="btn" on:click=submit>"Request pickup"</button>
            </div>
            <div class="muted" style="margin-top:0.75rem">"Requests are saved locally in this browser."</div>
        </div>
    }
}
