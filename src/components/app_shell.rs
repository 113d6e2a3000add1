//! Page chrome: header above the routed content, tab bar below.

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::mobile_bottom_nav::MobileBottomNav;

/// Wraps every routed page in the shared storefront chrome.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <BrandHeader/>
            <main class="app-shell__content">{children()}</main>
            <MobileBottomNav/>
        </div>
    }
}
