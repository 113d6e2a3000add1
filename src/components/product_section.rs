//! Titled product strip used on the home page.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::types::Product;

/// A headed grid of product cards; renders nothing when empty.
#[component]
pub fn ProductSection(#[prop(into)] title: String, products: Vec<Product>) -> impl IntoView {
    view! {
        <Show when={
            let is_empty = products.is_empty();
            move || !is_empty
        }>
            <section class="product-section">
                <h2 class="product-section__title">{title.clone()}</h2>
                <div class="product-section__grid">
                    {products
                        .clone()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect_view()}
                </div>
            </section>
        </Show>
    }
}
