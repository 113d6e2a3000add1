//! Cart page: joined lines, subtotal, remove/clear, checkout link.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::require_auth::RequireAuth;
use crate::net::types::Product;
use crate::state::cart::{self, CartState};
use crate::util::currency::format_inr;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart_state = expect_context::<RwSignal<CartState>>();
    let products = RwSignal::new(Vec::<Product>::new());

    cart::refresh(cart_state);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        products.set(api::get_products().await);
    });

    let on_remove = move |product_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::remove_from_cart(&product_id).await {
                Ok(()) => cart::refresh(cart_state),
                Err(e) => cart_state.update(|c| c.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = product_id;
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::clear_cart().await {
                Ok(()) => cart::refresh(cart_state),
                Err(e) => cart_state.update(|c| c.error = Some(e)),
            }
        });
    };

    view! {
        <RequireAuth message="Please sign in to view your cart">
            <div class="cart-page">
                <h1>"Shopping Cart"</h1>
                {move || {
                    let state = cart_state.get();
                    let lines = cart::join_lines(&state.items, &products.get());
                    if lines.is_empty() {
                        return view! {
                            <div class="cart-page__empty">
                                <h2>"Your cart is empty"</h2>
                                <p>"Add some products to get started"</p>
                                <a class="button" href="/catalog">
                                    "Browse Products"
                                </a>
                            </div>
                        }
                        .into_any();
                    }
                    let subtotal = cart::subtotal(&lines);
                    view! {
                        <div class="cart-page__lines">
                            {lines
                                .into_iter()
                                .map(|line| {
                                    let id = line.product.id.clone();
                                    view! {
                                        <div class="cart-line">
                                            <span class="cart-line__title">{line.product.title.clone()}</span>
                                            <span class="cart-line__quantity">{format!("x{}", line.quantity)}</span>
                                            <span class="cart-line__total">{format_inr(line.total())}</span>
                                            <button
                                                class="button button--small"
                                                on:click=move |_| on_remove(id.clone())
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                            <button class="button button--outline" on:click=on_clear>
                                "Clear Cart"
                            </button>
                        </div>
                        <aside class="cart-page__summary">
                            <h2>"Order Summary"</h2>
                            <p>"Subtotal: " {format_inr(subtotal)}</p>
                            <p class="cart-page__shipping-note">"Shipping calculated at checkout"</p>
                            <a class="button button--primary" href="/checkout">
                                "Proceed to Checkout"
                            </a>
                        </aside>
                    }
                    .into_any()
                }}
                <Show when=move || cart_state.get().error.is_some()>
                    <p class="cart-page__error">
                        {move || cart_state.get().error.unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </RequireAuth>
    }
}
