//! Remove Button Component
//!
//! Row-level delete used by every table. Removal is immediate and permanent.

use leptos::prelude::*;

/// Small danger button that runs `on_remove` when clicked
#[component]
pub fn RemoveButton(
    /// Button text, "Remove" by default
    #[prop(into, optional)] label: Option<String>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Remove".to_string());
    view! {
        <button
            class="btn small danger"
            on:click=move |ev| {
                ev.stop_propagation();
                on_remove.run(());
            }
        >
            {label}
        </button>
    }
}
