use super::*;

#[test]
fn in_flight_query_shows_verifying() {
    let query = AdminQuery {
        data: None,
        is_loading: true,
    };
    assert_eq!(decide(&query), AdminDecision::Verifying);
}

#[test]
fn confirmed_admin_is_allowed() {
    let query = AdminQuery {
        data: Some(true),
        is_loading: false,
    };
    assert_eq!(decide(&query), AdminDecision::Allowed);
}

#[test]
fn confirmed_non_admin_is_denied() {
    let query = AdminQuery {
        data: Some(false),
        is_loading: false,
    };
    assert_eq!(decide(&query), AdminDecision::Denied);
}

#[test]
fn unresolved_idle_query_fails_closed() {
    assert_eq!(decide(&AdminQuery::default()), AdminDecision::Denied);
}

/// The guest override is not an input to the admin decision at all; the
/// decision function's signature proves it, and elevation still renders
/// children while the guest flag is set.
#[test]
fn decision_ignores_local_session_flags() {
    use crate::state::session::{SessionFlags, resolve_session};

    let mut flags = SessionFlags::default();
    flags.enable_guest_mode();
    let session = resolve_session(&flags, &crate::state::session::RoleQuery::default());
    assert!(!session.is_signed_in);

    let query = AdminQuery {
        data: Some(true),
        is_loading: false,
    };
    assert_eq!(decide(&query), AdminDecision::Allowed);
}
