//! Volunteer Check-In / Check-Out
//!
//! Shift form, hour totals, and the checklist and calendar panels. All three
//! share this mount's context, so a check-in refreshes every panel.

use chrono::Utc;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::VolunteerService;

use crate::components::{VolunteerCalendar, VolunteerChecklist};
use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn VolunteerTools() -> impl IntoView {
    let ctx = use_app_context();

    let (shift, set_shift) = signal(String::new());
    let (event, set_event) = signal(String::new());
    let checklist_ref = NodeRef::<Div>::new();

    let summary = move || {
        ctx.track();
        VolunteerService::new(&ctx.store()).summary()
    };

    let check_in = move |_: MouseEvent| {
        let result = VolunteerService::new(&ctx.store()).check_in(&shift.get(), &event.get(), Utc::now());
        if ctx.commit(result).is_some() {
            set_shift.set(String::new());
            set_event.set(String::new());
            dom::alert("Checked in!");
            if let Some(panel) = checklist_ref.get() {
                panel.scroll_into_view();
            }
        }
    };

    let check_out = move |_: MouseEvent| {
        let result = VolunteerService::new(&ctx.store()).check_out(Utc::now());
        if let Some(entry) = ctx.commit(result) {
            dom::alert(&format!("Checked out! Logged {} minutes.", entry.minutes));
        }
    };

    view! {
        <div class="card">
            <h3>"Seamless Check-In / Check-Out"</h3>
            <p class="muted">"Check-ins and hours are logged in this browser."</p>

            <div class="form-row">
                <input
                    placeholder="Shift (open-ended)"
                    prop:value=shift
                    on:input=move |ev| set_shift.set(event_target_value(&ev))
                />
                <input
                    placeholder="Event (open-ended)"
                    prop:value=event
                    on:input=move |ev| set_event.set(event_target_value(&ev))
                />
                <button class="btn" on:click=check_in>"Check In"</button>
                <button class="btn subtle" on:click=check_out>"Check Out"</button>
            </div>

            {move || {
                let summary = summary();
                view! {
                    <div class="stats-row">
                        <div class="stat">
                            <div class="stat-number">{summary.total_hours.to_string()}</div>
                            <div class="stat-label">"Total hours"</div>
                        </div>
                        <div class="stat">
                            <div class="stat-number">{summary.check_ins}</div>
                            <div class="stat-label">"Total check-ins"</div>
                        </div>
                    </div>
                    {summary.most_recent.map(|last| view! {
                        <div class="muted" style="margin-top:0.5rem">
                            {format!("Most recent: {} — {} ({})", last.shift, last.event, last.date)}
                        </div>
                    })}
                }
            }}
        </div>

        <div id="volunteer-checklist-mount" node_ref=checklist_ref>
            <VolunteerChecklist />
        </div>
        <div id="volunteer-calendar-mount">
            <VolunteerCalendar />
        </div>
    }
}
