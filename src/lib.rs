//! # aurum
//!
//! Leptos + WASM storefront front-end for the Aurum boutique. Catalog
//! browsing, cart, checkout, orders, wishlist, profile management, and an
//! admin panel, all layered over a remote backend consumed through the typed
//! client in [`net::api`].
//!
//! No business logic lives here: pricing, persistence, order processing and
//! authorization checks are the backend's. The one piece of real client
//! logic is session resolution in [`state::session`], which merges the
//! remote role with two session-scoped local flags into the signed-in view
//! consumed by the access guards.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires panic reporting and console logging, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
