//! Cart state and line math.
//!
//! DESIGN
//! ======
//! The backend stores cart lines as `(product_id, quantity)` pairs; display
//! joins them against the product list client-side. Totals computed here are
//! presentation only; the authoritative order total is priced by the
//! backend at checkout.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{CartItem, Product};

/// Shared cart state backed by the backend cart query.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub loading: bool,
    /// A mutation (add/remove/clear/checkout) is in flight.
    pub pending: bool,
    pub error: Option<String>,
}

/// A cart line joined with its product.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u64,
}

impl CartLine {
    /// Line total in whole rupees.
    pub fn total(&self) -> u64 {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// Join cart items against the product list. Lines whose product is unknown
/// (deleted from the catalog after being carted) are dropped from display.
pub fn join_lines(items: &[CartItem], products: &[Product]) -> Vec<CartLine> {
    items
        .iter()
        .filter_map(|item| {
            products.iter().find(|p| p.id == item.product_id).map(|p| CartLine {
                product: p.clone(),
                quantity: item.quantity,
            })
        })
        .collect()
}

/// Display subtotal across all joined lines.
pub fn subtotal(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::total).sum()
}

/// Unit count for the header badge.
pub fn item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|i| i.quantity).sum()
}

/// Re-fetch the cart into the shared signal. Read failures leave an empty
/// cart rather than an error state.
pub fn refresh(cart: RwSignal<CartState>) {
    cart.update(|c| c.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = api::get_cart().await;
        cart.update(|c| {
            c.items = items;
            c.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    cart.update(|c| c.loading = false);
}
