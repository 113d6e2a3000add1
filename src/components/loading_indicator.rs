//! Shared spinner-with-caption placeholder.

use leptos::prelude::*;

/// Centered loading placeholder used by guards and list pages.
#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <div class="loading-indicator__spinner" aria-hidden="true"></div>
            <p class="loading-indicator__label">{label}</p>
        </div>
    }
}
