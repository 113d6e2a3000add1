//! Admin guard: children render only when the backend confirms admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin capability cannot be locally overridden, so this guard consults
//! only the remote `is_caller_admin` query, never the guest flag. An
//! unresolved-and-idle query (e.g. a failed fetch) reads as denied.

#[cfg(test)]
#[path = "admin_guard_test.rs"]
mod admin_guard_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::state::session::{self, AdminQuery};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AdminDecision {
    Verifying,
    Allowed,
    Denied,
}

pub(crate) fn decide(query: &AdminQuery) -> AdminDecision {
    if query.is_loading {
        AdminDecision::Verifying
    } else if query.data == Some(true) {
        AdminDecision::Allowed
    } else {
        AdminDecision::Denied
    }
}

/// Render `children` only for a backend-confirmed admin.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let admin_query = expect_context::<RwSignal<AdminQuery>>();
    // Issue the query on mount; remounting re-enters the loading state.
    if admin_query.with_untracked(|q| q.data.is_none() && !q.is_loading) {
        session::refresh_admin(admin_query);
    }
    view! {
        {move || match decide(&admin_query.get()) {
            AdminDecision::Verifying => {
                view! { <LoadingIndicator label="Verifying access..."/> }.into_any()
            }
            AdminDecision::Allowed => children().into_any(),
            AdminDecision::Denied => view! {
                <div class="access-denied" role="alert">
                    <h2>"Access Denied"</h2>
                    <p>
                        "You do not have permission to access this page. "
                        "Admin privileges are required."
                    </p>
                </div>
            }
            .into_any(),
        }}
    }
}
