//! Profile page: view and edit the caller's saved details.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::require_sign_in::RequireSignIn;
use crate::state::profile::{self, ProfileState};
use crate::state::session::{self, SessionFlags};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile_state = expect_context::<RwSignal<ProfileState>>();
    let flags = expect_context::<RwSignal<SessionFlags>>();
    profile::refresh(profile_state);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    // Seed the form once the profile query lands.
    Effect::new(move || {
        if let Some(profile) = profile_state.get().profile {
            name.set(profile.name);
            email.set(profile.email);
            address.set(profile.address);
            phone.set(profile.phone);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let updated = crate::net::types::UserProfile {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            address: address.get().trim().to_owned(),
            phone: phone.get().trim().to_owned(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::save_caller_user_profile(&updated).await {
                Ok(()) => {
                    notice.set("Profile saved".to_owned());
                    profile_state.update(|p| p.profile = Some(updated));
                }
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = updated;
    };

    let on_sign_out = move |_| {
        session::sign_out(flags);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <RequireSignIn message="Please sign in to manage your profile">
            <div class="profile-page">
                <h1>"My Profile"</h1>
                {move || {
                    let signed_in_as = flags
                        .get()
                        .auth_identity
                        .filter(|id| !id.is_empty());
                    signed_in_as.map(|id| view! {
                        <p class="profile-page__identity">"Signed in as " {id}</p>
                    })
                }}
                <form class="profile-page__form" on:submit=on_save>
                    <label>
                        "Name"
                        <input
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Address"
                        <input
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="button button--primary" type="submit">
                        "Save Profile"
                    </button>
                </form>
                <button class="button button--outline" on:click=on_sign_out>
                    "Sign Out"
                </button>
                <Show when=move || !notice.get().is_empty()>
                    <p class="profile-page__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </RequireSignIn>
    }
}
