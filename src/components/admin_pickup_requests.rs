//! Admin Pickup Request Viewer
//!
//! Requests made from the student page, each with its own copy of the slot.

use leptos::prelude::*;
use aggiesource_core::services::PickupService;

use crate::components::RemoveButton;
use crate::context::use_app_context;

#[component]
pub fn AdminPickupRequests() -> impl IntoView {
    let ctx = use_app_context();

    let requests = move || {
        ctx.track();
        PickupService::new(&ctx.store()).requests()
    };

    view! {
        <div class="card">
            <h3>"Pickup Requests (Admin)"</h3>
            <p class="muted">"Requests created from the Student view appear here."</p>
            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr><th>"Date"</th><th>"Time"</th><th>"Notes"</th><th>"Created"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            let requests = requests();
                            if requests.is_empty() {
                                return view! { <tr><td colspan="5">"No pickup requests yet."</td></tr> }.into_any();
                            }
                            requests.into_iter().enumerate().map(|(idx, request)| {
                                let created = request.created_label();
                                view! {
                                    <tr>
                                        <td>{request.slot.date}</td>
                                        <td>{request.slot.time}</td>
                                        <td>{request.notes}</td>
                                        <td>{created}</td>
                                        <td>
                                            <RemoveButton on_remove=Callback::new(move |_| {
                                                ctx.commit(PickupService::new(&ctx.store()).remove_request(idx));
                                            }) />
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
