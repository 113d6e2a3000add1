//! Call-to-action card shown when a guarded page needs an account.
//!
//! Shared by both sign-in guards so the "Sign In / Continue as Guest"
//! behavior stays identical everywhere.

use leptos::prelude::*;

use crate::state::session::{self, SessionFlags};

/// Offers sign-in (navigates to the login page) or guest mode (sets the
/// override and lets the surrounding guard re-evaluate).
#[component]
pub fn SignInPrompt(#[prop(optional, into)] message: String) -> impl IntoView {
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let description = if message.is_empty() {
        "Choose how you want to proceed".to_owned()
    } else {
        message
    };

    view! {
        <div class="sign-in-prompt">
            <div class="sign-in-prompt__card">
                <h2>"Sign In or Continue as Guest"</h2>
                <p class="sign-in-prompt__description">{description}</p>
                <a class="button button--primary" href="/account/login">
                    "Sign In"
                </a>
                <button
                    class="button button--outline"
                    on:click=move |_| session::enable_guest_mode(flags)
                >
                    "Continue as Guest"
                </button>
            </div>
        </div>
    }
}
