//! Caller profile state.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::UserProfile;

/// Shared profile state for the profile and checkout pages.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    /// `None` until fetched, or when the caller has never saved a profile.
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

/// Re-fetch the caller's profile into the shared signal.
pub fn refresh(profile: RwSignal<ProfileState>) {
    profile.update(|p| p.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = api::get_caller_user_profile().await;
        profile.update(|p| {
            p.profile = fetched;
            p.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    profile.update(|p| p.loading = false);
}
