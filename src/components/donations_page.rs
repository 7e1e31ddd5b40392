//! Donation Tracker
//!
//! Date / donor / item / status table; all four fields are required to add.

use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::DonationService;

use crate::components::RemoveButton;
use crate::context::use_app_context;

#[component]
pub fn DonationsPage() -> impl IntoView {
    let ctx = use_app_context();

    let (date, set_date) = signal(String::new());
    let (donor, set_donor) = signal(String::new());
    let (item, set_item) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let donations = move || {
        ctx.track();
        DonationService::new(&ctx.store()).list()
    };

    let add_donation = move |_: MouseEvent| {
        let result = DonationService::new(&ctx.store()).add(&date.get(), &donor.get(), &item.get(), &status.get());
        if ctx.commit(result).is_some() {
            set_date.set(String::new());
            set_donor.set(String::new());
            set_item.set(String::new());
            set_status.set(String::new());
        }
    };

    view! {
        <div class="card">
            <h2>"Donation Tracking"</h2>
            <p class="muted">"Dashboard stored in localStorage."</p>
            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr><th>"Date"</th><th>"Donor"</th><th>"Item"</th><th>"Status"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            let donations = donations();
                            if donations.is_empty() {
                                return view! { <tr><td colspan="5">"No donation entries yet."</td></tr> }.into_any();
                            }
                            donations.into_iter().enumerate().map(|(idx, d)| view! {
                                <tr>
                                    <td>{d.date}</td>
                                    <td>{d.donor}</td>
                                    <td>{d.item}</td>
                                    <td>{d.status}</td>
                                    <td>
                                        <RemoveButton on_remove=Callback::new(move |_| {
                                            ctx.commit(DonationService::new(&ctx.store()).remove(idx));
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
                    placeholder="Donor / Organization"
                    prop:value=donor
                    on:input=move |ev| set_donor.set(event_target_value(&ev))
                />
                <input
                    placeholder="Donation item(s)"
                    prop:value=item
                    on:input=move |ev| set_item.set(event_target_value(&ev))
                />
                <input
                    placeholder="Status (Scheduled / Received / Needs Attention)"
                    prop:value=status
                    on:input=move |ev| set_status.set(event_target_value(&ev))
                />
                <button class="btn" on:click=add_donation>"Add donation"</button>
            </div>
        </div>
    }
}
