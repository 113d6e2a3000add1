//! Full sign-in guard: children render only for a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by pages whose content is meaningless without an account (profile).
//! The decision is a pure function of the derived session, re-evaluated on
//! every render; the guard owns no polling or refetch loop.

#[cfg(test)]
#[path = "require_sign_in_test.rs"]
mod require_sign_in_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::state::session::{self, DerivedSession};

/// One-shot gate outcome; settles once the role query resolves and only
/// re-enters `Loading` on remount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GateDecision {
    Loading,
    Allow,
    Prompt,
}

pub(crate) fn decide(session: &DerivedSession) -> GateDecision {
    if session.is_loading {
        GateDecision::Loading
    } else if session.is_signed_in {
        GateDecision::Allow
    } else {
        GateDecision::Prompt
    }
}

/// Render `children` only when the session is fully signed in.
#[component]
pub fn RequireSignIn(
    children: ChildrenFn,
    #[prop(optional, into)] message: String,
) -> impl IntoView {
    let message = StoredValue::new(message);
    view! {
        {move || match decide(&session::current_session()) {
            GateDecision::Loading => view! { <LoadingIndicator label="Loading..."/> }.into_any(),
            GateDecision::Allow => children().into_any(),
            GateDecision::Prompt => {
                view! { <SignInPrompt message=message.get_value()/> }.into_any()
            }
        }}
    }
}
