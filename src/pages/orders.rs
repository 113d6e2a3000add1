//! Order history page.

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::state::orders::{self, OrdersState};
use crate::util::currency::format_inr;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders_state = expect_context::<RwSignal<OrdersState>>();
    orders::refresh(orders_state);

    view! {
        <RequireAuth message="Please sign in to view your orders">
            <div class="orders-page">
                <h1>"My Orders"</h1>
                {move || {
                    let state = orders_state.get();
                    if state.loading {
                        return view! { <p>"Loading orders..."</p> }.into_any();
                    }
                    if state.orders.is_empty() {
                        return view! {
                            <div class="orders-page__empty">
                                <h2>"No orders yet"</h2>
                                <a class="button" href="/catalog">
                                    "Browse Products"
                                </a>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="orders-page__list">
                            {state
                                .orders
                                .into_iter()
                                .map(|order| {
                                    let href = format!("/orders/{}", order.id);
                                    view! {
                                        <a class="order-row" href=href>
                                            <span class="order-row__id">{order.id.clone()}</span>
                                            <span class="order-row__date">
                                                {orders::format_order_date(order.created_at)}
                                            </span>
                                            <span class="order-row__status">
                                                {orders::status_label(&order.status)}
                                            </span>
                                            <span class="order-row__total">{format_inr(order.total)}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </RequireAuth>
    }
}
