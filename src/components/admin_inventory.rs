//! Admin Inventory Editor
//!
//! Inventory table with inline quantity edits and an add-row form.

use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::InventoryService;

use crate::components::RemoveButton;
use crate::context::use_app_context;

#[component]
pub fn AdminInventory() -> impl IntoView {
    let ctx = use_app_context();

    let (category, set_category) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (qty, set_qty) = signal(String::new());

    let items = move || {
        ctx.track();
        InventoryService::new(&ctx.store()).list()
    };

    let add_item = move |_: MouseEvent| {
        let result = InventoryService::new(&ctx.store()).add(&category.get(), &name.get(), &qty.get());
        if ctx.commit(result).is_some() {
            set_category.set(String::new());
            set_name.set(String::new());
            set_qty.set(String::new());
        }
    };

    view! {
        <div class="card">
            <h3>"Inventory Tracking (Admin)"</h3>
            <p class="muted">"Edits are stored in your browser (localStorage)."</p>
            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr><th>"Category"</th><th>"Item"</th><th>"Qty"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = items();
                            if items.is_empty() {
                                return view! { <tr><td colspan="4">"No items yet."</td></tr> }.into_any();
                            }
                            items.into_iter().enumerate().map(|(idx, item)| view! {
                                <tr>
                                    <td>{item.category}</td>
                                    <td>{item.name}</td>
                                    <td>
                                        <input
                                            type="number"
                                            min="0"
                                            class="qty-input"
                                            prop:value=item.qty.to_string()
                                            on:change=move |ev| {
                                                let raw = event_target_value(&ev);
                                                ctx.commit(InventoryService::new(&ctx.store()).set_quantity(idx, &raw));
                                            }
                                        />
                                    </td>
                                    <td>
                                        <RemoveButton on_remove=Callback::new(move |_| {
                                            ctx.commit(InventoryService::new(&ctx.store()).remove(idx));
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
                    placeholder="Category (e.g., Pantry)"
                    prop:value=category
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <input
                    placeholder="Item name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Qty"
                    prop:value=qty
                    on:input=move |ev| set_qty.set(event_target_value(&ev))
                />
                <button class="btn" on:click=add_item>"Add item"</button>
            </div>
        </div>
    }
}
