//! Wishlist page: saved products joined against the catalog.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::product_card::ProductCard;
use crate::components::require_auth::RequireAuth;
use crate::net::types::Product;
use crate::state::wishlist::{self, WishlistState};

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist_state = expect_context::<RwSignal<WishlistState>>();
    let products = RwSignal::new(Vec::<Product>::new());

    wishlist::refresh(wishlist_state);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        products.set(api::get_products().await);
    });

    view! {
        <RequireAuth message="Please sign in to view your wishlist">
            <div class="wishlist-page">
                <h1>"My Wishlist"</h1>
                {move || {
                    let state = wishlist_state.get();
                    if state.loading {
                        return view! { <p>"Loading wishlist..."</p> }.into_any();
                    }
                    let saved = wishlist::wishlist_products(&state.ids, &products.get());
                    if saved.is_empty() {
                        return view! {
                            <div class="wishlist-page__empty">
                                <h2>"Your wishlist is empty"</h2>
                                <p>"Save your favorite products here"</p>
                                <a class="button" href="/catalog">
                                    "Browse Products"
                                </a>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="wishlist-page__grid">
                            {saved
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </RequireAuth>
    }
}
