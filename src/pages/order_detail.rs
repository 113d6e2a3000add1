//! Single-order page with line items and status.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::require_auth::RequireAuth;
use crate::net::types::{Order, Product};
use crate::state::cart;
use crate::state::orders::{format_order_date, status_label};
use crate::util::currency::format_inr;

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let order = RwSignal::new(None::<Order>);
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let order_id = params.read_untracked().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            order.set(api::get_order(&order_id).await);
            products.set(api::get_products().await);
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        loading.set(false);
    }

    view! {
        <RequireAuth message="Please sign in to view this order">
            <div class="order-detail">
                {move || {
                    if loading.get() {
                        return view! { <p>"Loading order..."</p> }.into_any();
                    }
                    match order.get() {
                        None => view! {
                            <div class="order-detail__missing">
                                <h1>"Order not found"</h1>
                                <a class="button" href="/orders">
                                    "Back to Orders"
                                </a>
                            </div>
                        }
                        .into_any(),
                        Some(order) => {
                            let lines = cart::join_lines(&order.items, &products.get());
                            view! {
                                <article>
                                    <h1>"Order " {order.id.clone()}</h1>
                                    <p>
                                        {format_order_date(order.created_at)} " \u{00B7} "
                                        {status_label(&order.status)}
                                    </p>
                                    <div class="order-detail__lines">
                                        {lines
                                            .into_iter()
                                            .map(|line| view! {
                                                <div class="order-detail__line">
                                                    <span>{line.product.title.clone()}</span>
                                                    <span>{format!("x{}", line.quantity)}</span>
                                                    <span>{format_inr(line.total())}</span>
                                                </div>
                                            })
                                            .collect_view()}
                                    </div>
                                    <p class="order-detail__total">
                                        "Total: " {format_inr(order.total)}
                                    </p>
                                </article>
                            }
                            .into_any()
                        }
                    }
                }}
            </div>
        </RequireAuth>
    }
}
