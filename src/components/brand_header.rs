//! Top navigation bar: brand, primary links, cart badge, theme toggle.

use leptos::prelude::*;

use crate::components::login_button::LoginButton;
use crate::state::cart::{self, CartState};
use crate::util::dark_mode;

/// Storefront header shown on every route.
#[component]
pub fn BrandHeader() -> impl IntoView {
    let cart_state = expect_context::<RwSignal<CartState>>();
    let dark = RwSignal::new(dark_mode::read_preference());
    dark_mode::apply(dark.get_untracked());

    let badge = move || cart::item_count(&cart_state.get().items);

    view! {
        <header class="brand-header">
            <a class="brand-header__logo" href="/">
                "Aurum"
            </a>
            <nav class="brand-header__nav">
                <a href="/catalog">"Catalog"</a>
                <a href="/orders">"Orders"</a>
                <a href="/wishlist">"Wishlist"</a>
            </nav>
            <div class="brand-header__actions">
                <button
                    class="brand-header__theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
                >
                    {move || if dark.get() { "\u{2600}" } else { "\u{263D}" }}
                </button>
                <a class="brand-header__cart" href="/cart" aria-label="Cart">
                    "Cart"
                    <Show when=move || (badge() > 0)>
                        <span class="brand-header__cart-badge">{badge}</span>
                    </Show>
                </a>
                <LoginButton/>
            </div>
        </header>
    }
}
