//! Session resolution: one signed-in/guest/admin view from three sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three independent signals decide what the visitor is: the backend role
//! query, the tab-scoped guest-mode override, and the tab-scoped alternate
//! sign-in flag. [`resolve_session`] merges them under a total precedence
//! order (guest override > alternate auth > remote role) and every access
//! guard and identity-aware component consumes its output. Nothing else in
//! the crate re-derives signed-in state.
//!
//! ERROR HANDLING
//! ==============
//! A failed role query degrades to `Guest` inside the fetch path; resolution
//! itself is a pure function and cannot fail.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::UserRole;
use crate::util::session_store;

const GUEST_MODE_KEY: &str = "aurum_guest_mode";
const AUTH_METHOD_KEY: &str = "aurum_auth_method";
const AUTH_IDENTITY_KEY: &str = "aurum_auth_identity";

/// How the visitor completed the local sign-in flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    Email,
    Google,
    Phone,
}

impl AuthMethod {
    /// Stable storage token for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Google => "google",
            Self::Phone => "phone",
        }
    }

    /// Parse a storage token written by [`AuthMethod::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Self::Email),
            "google" => Some(Self::Google),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

/// The two tab-scoped local flags, as a plain value.
///
/// All transitions are pure methods; persistence happens in the
/// signal-backed wrappers below so the precedence logic stays testable
/// without a browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionFlags {
    /// Explicit "continue as guest" override.
    pub guest_mode: bool,
    /// Method recorded by the local sign-in flow, if completed.
    pub auth_method: Option<AuthMethod>,
    /// Identifier captured at sign-in (email address or phone number).
    pub auth_identity: Option<String>,
}

impl SessionFlags {
    /// Whether the local sign-in flow has been completed.
    pub fn has_alternate_auth(&self) -> bool {
        self.auth_method.is_some()
    }

    /// Turn on the guest override. Idempotent: no toggle semantics.
    pub fn enable_guest_mode(&mut self) {
        self.guest_mode = true;
    }

    /// Record a completed local sign-in. Clears the guest override, so a
    /// sign-in always wins over an earlier "continue as guest".
    pub fn complete_sign_in(&mut self, method: AuthMethod, identity: Option<String>) {
        self.auth_method = Some(method);
        self.auth_identity = identity;
        self.guest_mode = false;
    }

    /// Clear both flags unconditionally.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

/// Result of the backend role query.
///
/// `data == None` means the query has not resolved; that is distinct from a
/// resolved `Guest`, which the fetch path also substitutes on failure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoleQuery {
    pub data: Option<UserRole>,
    pub is_loading: bool,
    pub is_fetched: bool,
}

/// Result of the backend admin-status query, consumed by the admin guard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdminQuery {
    pub data: Option<bool>,
    pub is_loading: bool,
}

/// The merged session view. Pure function of its inputs at read time; no
/// independent lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedSession {
    pub is_signed_in: bool,
    pub role: UserRole,
    pub is_loading: bool,
    pub is_fetched: bool,
}

/// Merge the local flags and the role query into the session view.
///
/// Precedence, evaluated in order:
/// 1. guest override on → signed out, role `Guest`;
/// 2. otherwise signed in iff the alternate-auth flag is set or the remote
///    role is a registered tier, with the role defaulting to `Guest` until
///    the query resolves.
///
/// The query's `is_loading` is surfaced in both branches so callers can show
/// transient loading state during initial load.
pub fn resolve_session(flags: &SessionFlags, query: &RoleQuery) -> DerivedSession {
    if flags.guest_mode {
        return DerivedSession {
            is_signed_in: false,
            role: UserRole::Guest,
            is_loading: query.is_loading,
            is_fetched: query.is_fetched,
        };
    }
    DerivedSession {
        is_signed_in: flags.has_alternate_auth() || query.data.is_some_and(UserRole::is_registered),
        role: query.data.unwrap_or_default(),
        is_loading: query.is_loading,
        is_fetched: query.is_fetched,
    }
}

/// Load the flags from sessionStorage. Missing or unparseable values read as
/// unset; storage access never blocks rendering.
pub fn load_flags() -> SessionFlags {
    let auth_method = session_store::get_item(AUTH_METHOD_KEY)
        .as_deref()
        .and_then(AuthMethod::parse);
    SessionFlags {
        guest_mode: session_store::get_item(GUEST_MODE_KEY).as_deref() == Some("true"),
        auth_method,
        // An identity without a method is stale; ignore it.
        auth_identity: auth_method.and_then(|_| session_store::get_item(AUTH_IDENTITY_KEY)),
    }
}

fn persist_flags(flags: &SessionFlags) {
    if flags.guest_mode {
        session_store::set_item(GUEST_MODE_KEY, "true");
    } else {
        session_store::remove_item(GUEST_MODE_KEY);
    }
    match flags.auth_method {
        Some(method) => session_store::set_item(AUTH_METHOD_KEY, method.as_str()),
        None => session_store::remove_item(AUTH_METHOD_KEY),
    }
    match &flags.auth_identity {
        Some(identity) => session_store::set_item(AUTH_IDENTITY_KEY, identity),
        None => session_store::remove_item(AUTH_IDENTITY_KEY),
    }
}

/// Read the current session view from context. Tracks both underlying
/// signals, so callers re-run when either the flags or the query change.
pub fn current_session() -> DerivedSession {
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let query = expect_context::<RwSignal<RoleQuery>>();
    resolve_session(&flags.get(), &query.get())
}

/// "Continue as guest" action: set the override and persist it.
pub fn enable_guest_mode(flags: RwSignal<SessionFlags>) {
    flags.update(SessionFlags::enable_guest_mode);
    persist_flags(&flags.get_untracked());
}

/// Local sign-in completion: record the method, clear guest mode, persist.
pub fn complete_sign_in(
    flags: RwSignal<SessionFlags>,
    method: AuthMethod,
    identity: Option<String>,
) {
    flags.update(|f| f.complete_sign_in(method, identity));
    persist_flags(&flags.get_untracked());
}

/// Explicit sign-out: clear both flags and persist the cleared state.
pub fn sign_out(flags: RwSignal<SessionFlags>) {
    flags.update(SessionFlags::sign_out);
    persist_flags(&flags.get_untracked());
}

/// Kick off (or re-run) the backend role query, updating the shared signal.
/// Failures inside the fetch resolve to `Guest` rather than surfacing.
pub fn refresh_role(query: RwSignal<RoleQuery>) {
    query.update(|q| q.is_loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let role = api::get_caller_user_role().await;
        query.set(RoleQuery {
            data: Some(role),
            is_loading: false,
            is_fetched: true,
        });
    });
    #[cfg(not(feature = "hydrate"))]
    query.update(|q| q.is_loading = false);
}

/// Kick off (or re-run) the backend admin-status query.
/// Failures degrade to `false`; admin capability is never assumed.
pub fn refresh_admin(query: RwSignal<AdminQuery>) {
    query.update(|q| q.is_loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let is_admin = api::is_caller_admin().await;
        query.set(AdminQuery {
            data: Some(is_admin),
            is_loading: false,
        });
    });
    #[cfg(not(feature = "hydrate"))]
    query.update(|q| q.is_loading = false);
}
