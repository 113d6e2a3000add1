//! Wishlist state: backend-stored product ids joined against the catalog.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Product, ProductId};

/// Shared wishlist state.
#[derive(Clone, Debug, Default)]
pub struct WishlistState {
    pub ids: Vec<ProductId>,
    pub loading: bool,
}

/// Resolve wishlist ids to products, preserving wishlist order and dropping
/// ids no longer in the catalog.
pub fn wishlist_products(ids: &[ProductId], products: &[Product]) -> Vec<Product> {
    ids.iter()
        .filter_map(|id| products.iter().find(|p| &p.id == id).cloned())
        .collect()
}

/// Whether a product is already wishlisted, for toggling button state.
pub fn contains(ids: &[ProductId], product_id: &str) -> bool {
    ids.iter().any(|id| id == product_id)
}

/// Re-fetch the wishlist into the shared signal.
pub fn refresh(wishlist: RwSignal<WishlistState>) {
    wishlist.update(|w| w.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let ids = api::get_wishlist().await;
        wishlist.update(|w| {
            w.ids = ids;
            w.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    wishlist.update(|w| w.loading = false);
}
