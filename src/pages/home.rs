//! Landing page: hero banner plus featured and best-selling products.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::product_section::ProductSection;
use crate::net::types::Product;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(Vec::<Product>::new());
    let best_seller = RwSignal::new(Vec::<Product>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut products = api::get_products().await;
        products.truncate(8);
        featured.set(products);
        if let Some(product) = api::get_best_selling_product().await {
            best_seller.set(vec![product]);
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Aurum"</h1>
                <p>"Handpicked pieces, delivered across India."</p>
                <a class="button button--primary" href="/catalog">
                    "Browse the Catalog"
                </a>
            </section>
            {move || view! { <ProductSection title="Best Seller" products=best_seller.get()/> }}
            {move || view! { <ProductSection title="Featured" products=featured.get()/> }}
        </div>
    }
}
