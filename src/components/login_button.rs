//! Header sign-in/sign-out button.

use leptos::prelude::*;

use crate::state::session::{self, SessionFlags};

/// Toggles between "Sign In" (navigates to the login page) and "Logout"
/// (clears both local flags, then returns home).
#[component]
pub fn LoginButton() -> impl IntoView {
    let flags = expect_context::<RwSignal<SessionFlags>>();

    let on_logout = move |_| {
        session::sign_out(flags);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        {move || {
            if session::current_session().is_signed_in {
                view! {
                    <button class="button button--outline button--small" on:click=on_logout>
                        "Logout"
                    </button>
                }
                .into_any()
            } else {
                view! {
                    <a class="button button--small" href="/account/login">
                        "Sign In"
                    </a>
                }
                .into_any()
            }
        }}
    }
}
