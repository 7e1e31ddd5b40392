//! Volunteer Calendar Panel
//!
//! Months with at least one logged shift, newest first.

use leptos::prelude::*;
use aggiesource_core::services::VolunteerService;

use crate::context::use_app_context;

#[component]
pub fn VolunteerCalendar() -> impl IntoView {
    let ctx = use_app_context();

    let months = move || {
        ctx.track();
        VolunteerService::new(&ctx.store()).calendar()
    };

    view! {
        <div class="card">
            <h3>"Volunteer Calendar"</h3>
            <p class="muted">"Shows months with at least one volunteer shift."</p>
        </div>
        <div class="grid-2">
            {move || {
                let months = months();
                if months.is_empty() {
                    return view! { <p class="muted">"No logged shifts yet."</p> }.into_any();
                }
                months.into_iter().map(|month| {
                    let days = if month.days.is_empty() {
                        view! { <span class="muted">"No shifts this month."</span> }.into_any()
                    } else {
                        month.days
                            .into_iter()
                            .map(|day| view! { <span class="pill">{day}</span> })
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <div class="card">
                            <div class="card-head">
                                <h4>{month.month}</h4>
                                <div class="muted">{format!("{} hours total", month.hours)}</div>
                            </div>
                            <div class="pill-row">{days}</div>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}
