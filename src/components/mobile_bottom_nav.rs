//! Bottom tab bar for narrow viewports.

use leptos::prelude::*;

/// Fixed bottom navigation mirroring the header's primary destinations.
#[component]
pub fn MobileBottomNav() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            <a class="bottom-nav__item" href="/">
                "Home"
            </a>
            <a class="bottom-nav__item" href="/catalog">
                "Catalog"
            </a>
            <a class="bottom-nav__item" href="/cart">
                "Cart"
            </a>
            <a class="bottom-nav__item" href="/profile">
                "Account"
            </a>
        </nav>
    }
}
