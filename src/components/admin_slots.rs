//! Admin Pickup Slots
//!
//! Slot table with inline capacity edits and an add-row form. Students can
//! only request the slots listed here.

use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::SlotService;

use crate::components::RemoveButton;
use crate::context::use_app_context;

#[component]
pub fn AdminSlots() -> impl IntoView {
    let ctx = use_app_context();

    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (capacity, set_capacity) = signal(String::new());

    let slots = move || {
        ctx.track();
        SlotService::new(&ctx.store()).list()
    };

    let add_slot = move |_: MouseEvent| {
        let result = SlotService::new(&ctx.store()).add(&date.get(), &time.get(), &capacity.get());
        if ctx.commit(result).is_some() {
            set_date.set(String::new());
            set_time.set(String::new());
            set_capacity.set(String::new());
        }
    };

    view! {
        <div class="card">
            <h3>"Pickup Slots (Admin)"</h3>
            <p class="muted">"Students can only request pickup times you list here."</p>
            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr><th>"Date"</th><th>"Time"</th><th>"Capacity"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            let slots = slots();
                            if slots.is_empty() {
                                return view! { <tr><td colspan="4">"No slots yet."</td></tr> }.into_any();
                            }
                            slots.into_iter().enumerate().map(|(idx, slot)| view! {
                                <tr>
                                    <td>{slot.date}</td>
                                    <td>{slot.time}</td>
                                    <td>
                                        <input
                                            type="number"
                                            min="0"
                                            class="cap-input"
                                            prop:value=slot.capacity.to_string()
                                            on:change=move |ev| {
                                                let raw = event_target_value(&ev);
                                                ctx.commit(SlotService::new(&ctx.store()).set_capacity(idx, &raw));
                                            }
                                        />
                                    </td>
                                    <td>
                                        <RemoveButton on_remove=Callback::new(move |_| {
                                            ctx.commit(SlotService::new(&ctx.store()).remove(idx));
                                        }) />
                                    </td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="form-row">
                <input
                    type="date"
                    prop:value=date
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <input
                    placeholder="Time (e.g., 1:30 PM)"
                    prop:value=time
                    on:input=move |ev| set_time.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Capacity"
                    prop:value=capacity
                    on:input=move |ev| set_capacity.set(event_target_value(&ev))
                />
                <button class="btn" on:click=add_slot>"Add slot"</button>
            </div>
        </div>
    }
}
