//! Student Inventory and Request Cart
//!
//! In-stock items with "Add to cart", and the cart itself. Adding copies the
//! item name; stock is neither checked nor decremented.

use leptos::prelude::*;
use web_sys::MouseEvent;
use aggiesource_core::services::{CartService, InventoryService};

use crate::context::use_app_context;

#[component]
pub fn StudentInventory() -> impl IntoView {
    let ctx = use_app_context();

    let in_stock = move || {
        ctx.track();
        InventoryService::new(&ctx.store()).in_stock()
    };
    let cart = move || {
        ctx.track();
        CartService::new(&ctx.store()).list()
    };

    let clear_cart = move |_: MouseEvent| {
        ctx.commit(CartService::new(&ctx.store()).clear());
    };

    view! {
        <div class="card">
            <h3>"Inventory Transparency"</h3>
            <p class="muted">"Students see only items that are currently in stock."</p>
            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr><th>"Category"</th><th>"Item"</th><th>"In Stock"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = in_stock();
                            if items.is_empty() {
                                return view! { <tr><td colspan="4">"No items currently available."</td></tr> }.into_any();
                            }
                            items.into_iter().map(|item| {
                                let name = item.name.clone();
                                view! {
                                    <tr>
                                        <td>{item.category}</td>
                                        <td>{item.name}</td>
                                        <td>{item.qty}</td>
                                        <td>
                                            <button
                                                class="btn small"
                                                on:click=move |_| {
                                                    ctx.commit(CartService::new(&ctx.store()).add(&name));
                                                }
                                            >
                                                "Add to cart"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>

        <div class="card">
            <h3>"Your Request Cart"</h3>
            <p class="muted">"Your cart is stored in this browser until a volunteer fulfills it."</p>
            <ul class="cart-list">
                {move || {
                    let entries = cart();
                    if entries.is_empty() {
                        return view! { <li class="muted">"Cart is empty."</li> }.into_any();
                    }
                    entries.into_iter().enumerate().map(|(idx, entry)| view! {
                        <li>
                            {entry} " "
                            <button
                                class="link"
                                on:click=move |_| {
                                    ctx.commit(CartService::new(&ctx.store()).remove(idx));
                                }
                            >
                                "remove"
                            </button>
                        </li>
                    }).collect_view().into_any()
                }}
            </ul>
            <button class="btn subtle" on:click=clear_cart>"Clear cart"</button>
        </div>
    }
}
