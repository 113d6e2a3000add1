//! Local sign-in page: Google simulation, phone number, or guest mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! Completing either sign-in records the alternate-auth flag in
//! sessionStorage and clears any guest override, which flips every guard's
//! derived session on the next render. No credential ever leaves the tab;
//! real identity, when present, comes from the backend role query.

#[cfg(test)]
#[path = "account_login_test.rs"]
mod account_login_test;

use leptos::prelude::*;

use crate::state::session::{self, AuthMethod, SessionFlags};

/// Validate the email sign-in input: a trimmed `local@domain` shape. Real
/// address verification is not this page's job.
pub(crate) fn validate_email(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(trimmed.to_owned())
    } else {
        Err("Enter a valid email address.")
    }
}

/// Validate the phone sign-in input: digits only, 10 of them, after
/// stripping spaces and dashes.
pub(crate) fn validate_phone(input: &str) -> Result<String, &'static str> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if normalized.len() == 10 && normalized.bytes().all(|b| b.is_ascii_digit()) {
        Ok(normalized)
    } else {
        Err("Enter a 10-digit mobile number.")
    }
}

#[component]
pub fn AccountLoginPage() -> impl IntoView {
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let finish = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/profile");
            }
        }
    };

    let on_google = move |_| {
        session::complete_sign_in(flags, AuthMethod::Google, None);
        finish();
    };

    let on_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get()) {
            Ok(address) => {
                session::complete_sign_in(flags, AuthMethod::Email, Some(address));
                finish();
            }
            Err(message) => notice.set(message.to_owned()),
        }
    };

    let on_phone = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_phone(&phone.get()) {
            Ok(number) => {
                session::complete_sign_in(flags, AuthMethod::Phone, Some(number));
                finish();
            }
            Err(message) => notice.set(message.to_owned()),
        }
    };

    let on_guest = move |_| {
        session::enable_guest_mode(flags);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/catalog");
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Access your Aurum account"</p>
                <button class="button button--outline" on:click=on_google>
                    "Continue with Google"
                </button>
                <div class="login-divider"></div>
                <form class="login-form" on:submit=on_email>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit">
                        "Continue with Email"
                    </button>
                </form>
                <form class="login-form" on:submit=on_phone>
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="10-digit mobile number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit">
                        "Continue with Phone"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-message">{move || notice.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="button button--ghost" on:click=on_guest>
                    "Continue as Guest"
                </button>
            </div>
        </div>
    }
}
