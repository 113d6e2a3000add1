//! Admin activation page: one-time code entry for role elevation.
//!
//! Not wrapped in `AdminGuard`: this page is how a non-admin becomes one.
//! Shape validation happens client-side; everything else is the backend's
//! verdict, shown verbatim.

use leptos::prelude::*;

use crate::state::admin::{self, ActivationStatus};
use crate::state::session::{AdminQuery, RoleQuery};

#[component]
pub fn AdminActivatePage() -> impl IntoView {
    let role_query = expect_context::<RwSignal<RoleQuery>>();
    let admin_query = expect_context::<RwSignal<AdminQuery>>();
    let status = RwSignal::new(ActivationStatus::Idle);
    let code = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get() == ActivationStatus::Submitting {
            return;
        }
        admin::submit_activation(status, role_query, admin_query, &code.get());
    };

    view! {
        <div class="admin-activate">
            <div class="admin-activate__card">
                <h1>"Admin Activation"</h1>
                <p>"Enter the one-time activation code to unlock the admin panel."</p>
                <form on:submit=on_submit>
                    <input
                        class="admin-activate__code"
                        type="text"
                        inputmode="numeric"
                        maxlength="4"
                        placeholder="0000"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        type="submit"
                        disabled=move || status.get() == ActivationStatus::Submitting
                    >
                        {move || {
                            if status.get() == ActivationStatus::Submitting {
                                "Activating..."
                            } else {
                                "Activate"
                            }
                        }}
                    </button>
                </form>
                {move || match status.get() {
                    ActivationStatus::Activated => view! {
                        <p class="admin-activate__success">
                            "Admin access granted. "
                            <a href="/admin">"Go to the dashboard"</a>
                        </p>
                    }
                    .into_any(),
                    ActivationStatus::Failed(message) => {
                        view! { <p class="admin-activate__error">{message}</p> }.into_any()
                    }
                    ActivationStatus::Idle | ActivationStatus::Submitting => ().into_any(),
                }}
            </div>
        </div>
    }
}
