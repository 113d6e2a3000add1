//! Admin dashboard: order and revenue aggregates.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::admin_guard::AdminGuard;
use crate::net::types::{Order, Product};
use crate::state::admin::dashboard_metrics;
use crate::util::currency::format_inr;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let product_count = RwSignal::new(0usize);
    let best_seller = RwSignal::new(None::<Product>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        orders.set(api::get_orders().await);
        product_count.set(api::get_products().await.len());
        best_seller.set(api::get_best_selling_product().await);
    });

    view! {
        <AdminGuard>
            <div class="admin-dashboard">
                <h1>"Admin Dashboard"</h1>
                {move || {
                    let metrics = dashboard_metrics(&orders.get());
                    view! {
                        <div class="admin-dashboard__tiles">
                            <div class="stat-tile">
                                <span class="stat-tile__value">{metrics.order_count}</span>
                                <span class="stat-tile__label">"Orders"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">{metrics.pending_count}</span>
                                <span class="stat-tile__label">"Pending"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">{format_inr(metrics.revenue)}</span>
                                <span class="stat-tile__label">"Revenue"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">{product_count.get()}</span>
                                <span class="stat-tile__label">"Products"</span>
                            </div>
                        </div>
                    }
                }}
                {move || {
                    best_seller.get().map(|product| view! {
                        <p class="admin-dashboard__best-seller">
                            "Best seller: " {product.title.clone()} " ("
                            {format_inr(product.price)} ")"
                        </p>
                    })
                }}
                <nav class="admin-dashboard__links">
                    <a href="/admin/products">"Manage Products"</a>
                    <a href="/admin/orders">"Manage Orders"</a>
                    <a href="/admin/customers">"Manage Customers"</a>
                </nav>
            </div>
        </AdminGuard>
    }
}
