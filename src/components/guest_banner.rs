//! Informational banner shown while browsing in guest mode.

use leptos::prelude::*;

/// Reminds a guest that nothing they do is tied to an account.
#[component]
pub fn GuestBanner() -> impl IntoView {
    view! {
        <div class="guest-banner" role="status">
            <span class="guest-banner__title">"Guest Mode:"</span>
            " Some features may require signing in to save your data."
        </div>
    }
}
