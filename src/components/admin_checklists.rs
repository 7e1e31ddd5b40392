//! Admin Checklist Builder
//!
//! Checklists created here appear for volunteers after check-in (first one only).

use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::ChecklistService;

use crate::components::RemoveButton;
use crate::context::use_app_context;

#[component]
pub fn AdminChecklists() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (items, set_items) = signal(String::new());

    let templates = move || {
        ctx.track();
        ChecklistService::new(&ctx.store()).list()
    };

    let create = move |_: MouseEvent| {
        let result = ChecklistService::new(&ctx.store()).add(&title.get(), &items.get());
        if ctx.commit(result).is_some() {
            set_title.set(String::new());
            set_items.set(String::new());
        }
    };

    view! {
        <div class="card">
            <h3>"Volunteer Checklists (Admin)"</h3>
            <p class="muted">"Create checklists that appear for volunteers after check-in."</p>
            <div class="form-row">
                <input
                    placeholder="Checklist title (e.g., Event Setup)"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    placeholder="Items (comma-separated)"
                    prop:value=items
                    on:input=move |ev| set_items.set(event_target_value(&ev))
                />
                <button class="btn" on:click=create>"Create checklist"</button>
            </div>
        </div>
        <div class="grid-2">
            {move || {
                let templates = templates();
                if templates.is_empty() {
                    return view! { <p class="muted">"No checklists yet."</p> }.into_any();
                }
                templates.into_iter().enumerate().map(|(idx, template)| view! {
                    <div class="card">
                        <div class="card-head">
                            <h4>{template.title}</h4>
                            <RemoveButton label="Delete" on_remove=Callback::new(move |_| {
                                ctx.commit(ChecklistService::new(&ctx.store()).remove(idx));
                            }) />
                        </div>
                        <ul class="checklist">
                            {template.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view().into_any()
            }}
        </div>
    }
}
