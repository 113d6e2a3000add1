//! Guest-tolerant guard: children render for signed-in or guest sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the shopping surfaces (cart, checkout, orders, wishlist) that a
//! guest may browse but cannot persist. A visitor who is neither signed in
//! nor in guest mode gets the shared sign-in prompt; choosing "continue as
//! guest" flips the override and this guard re-evaluates to the guest
//! branch with its banner.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;

use crate::components::guest_banner::GuestBanner;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::state::session::{self, DerivedSession, SessionFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuestGateDecision {
    /// Render children; `banner` marks an un-signed-in guest.
    Allow { banner: bool },
    Prompt,
}

pub(crate) fn decide(session: &DerivedSession, guest_mode: bool) -> GuestGateDecision {
    if session.is_signed_in || guest_mode {
        GuestGateDecision::Allow {
            banner: guest_mode && !session.is_signed_in,
        }
    } else {
        GuestGateDecision::Prompt
    }
}

/// Render `children` for signed-in users and explicit guests.
#[component]
pub fn RequireAuth(
    children: ChildrenFn,
    #[prop(optional, into)] message: String,
) -> impl IntoView {
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let message = StoredValue::new(message);
    view! {
        {move || {
            let guest_mode = flags.get().guest_mode;
            match decide(&session::current_session(), guest_mode) {
                GuestGateDecision::Allow { banner } => view! {
                    <Show when=move || banner>
                        <GuestBanner/>
                    </Show>
                    {children()}
                }
                .into_any(),
                GuestGateDecision::Prompt => {
                    view! { <SignInPrompt message=message.get_value()/> }.into_any()
                }
            }
        }}
    }
}
