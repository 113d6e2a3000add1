//! Admin order management: list every order, update statuses.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::admin_guard::AdminGuard;
use crate::net::types::Order;
use crate::state::orders::{STATUS_CHOICES, format_order_date, status_label};
use crate::util::currency::format_inr;

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            orders.set(api::get_orders().await);
        });
    };
    #[cfg(feature = "hydrate")]
    reload();

    let on_status_change = move |order_id: String, status: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_order_status(&order_id, &status).await {
                Ok(()) => reload(),
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (order_id, status);
    };

    view! {
        <AdminGuard>
            <div class="admin-orders">
                <h1>"Orders"</h1>
                <Show when=move || !notice.get().is_empty()>
                    <p class="admin-orders__notice">{move || notice.get()}</p>
                </Show>
                {move || {
                    let list = orders.get();
                    if list.is_empty() {
                        return view! { <p>"No orders yet."</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|order| {
                            let id = order.id.clone();
                            let current = order.status.clone();
                            view! {
                                <div class="admin-orders__row">
                                    <span>{order.id.clone()}</span>
                                    <span>{format_order_date(order.created_at)}</span>
                                    <span>{format_inr(order.total)}</span>
                                    <select on:change={
                                        let id = id.clone();
                                        move |ev| on_status_change(id.clone(), event_target_value(&ev))
                                    }>
                                        {STATUS_CHOICES
                                            .into_iter()
                                            .map(|choice| view! {
                                                <option
                                                    value=choice
                                                    selected=current == choice
                                                >
                                                    {status_label(choice)}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </AdminGuard>
    }
}
