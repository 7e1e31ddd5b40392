//! Volunteer Checklist Panel
//!
//! Visible only while checked in. Shows the first admin checklist with
//! today's shared progress.

use leptos::prelude::*;
use aggiesource_core::services::VolunteerService;

use crate::context::use_app_context;

#[component]
pub fn VolunteerChecklist() -> impl IntoView {
    let ctx = use_app_context();

    let checklist = move || {
        ctx.track();
        VolunteerService::new(&ctx.store()).checklist()
    };

    move || match checklist() {
        None => view! {
            <div class="card">
                <h3>"Checklist"</h3>
                <p class="muted">"Check in to see your assigned checklist."</p>
            </div>
        }
        .into_any(),
        Some(list) => {
            let percent = list.completion.percent;
            let entries = if list.entries.is_empty() {
                view! { <li class="muted">"No checklist items yet."</li> }.into_any()
            } else {
                list.entries
                    .into_iter()
                    .enumerate()
                    .map(|(idx, entry)| view! {
                        <li>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=entry.done
                                    on:change=move |ev| {
                                        let done = event_target_checked(&ev);
                                        ctx.commit(VolunteerService::new(&ctx.store()).set_checklist_item(idx, done));
                                    }
                                />
                                <span>{entry.label}</span>
                            </label>
                        </li>
                    })
                    .collect_view()
                    .into_any()
            };
            view! {
                <div class="card">
                    <h3>{list.title}</h3>
                    <p class="muted">"Based on admin input. Your progress updates as you check items off."</p>
                    <progress value=percent.to_string() max="100" style="width:100%;height:16px"></progress>
                    <div class="muted" style="margin-top:0.35rem">{format!("{}% complete", percent)}</div>
                    <ul class="checklist interactive">{entries}</ul>
                </div>
            }
            .into_any()
        }
    }
}
