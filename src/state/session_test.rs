use super::*;

fn flags(guest_mode: bool, auth_method: Option<AuthMethod>) -> SessionFlags {
    SessionFlags {
        guest_mode,
        auth_method,
        auth_identity: auth_method.map(|_| "someone@example.com".to_owned()),
    }
}

fn settled(data: Option<UserRole>) -> RoleQuery {
    RoleQuery {
        data,
        is_loading: false,
        is_fetched: data.is_some(),
    }
}

/// Sweep the full 2 x 2 x 4 input space against the documented precedence:
/// guest override > alternate auth > remote role.
#[test]
fn resolution_matches_precedence_over_full_input_space() {
    let roles = [
        None,
        Some(UserRole::Guest),
        Some(UserRole::User),
        Some(UserRole::Admin),
    ];
    for guest_mode in [false, true] {
        for auth_method in [None, Some(AuthMethod::Google)] {
            for role in roles {
                let session = resolve_session(&flags(guest_mode, auth_method), &settled(role));

                let expected_signed_in = !guest_mode
                    && (auth_method.is_some()
                        || matches!(role, Some(UserRole::User | UserRole::Admin)));
                let expected_role = if guest_mode {
                    UserRole::Guest
                } else {
                    role.unwrap_or(UserRole::Guest)
                };

                assert_eq!(
                    session.is_signed_in, expected_signed_in,
                    "guest_mode={guest_mode} auth={auth_method:?} role={role:?}"
                );
                assert_eq!(
                    session.role, expected_role,
                    "guest_mode={guest_mode} auth={auth_method:?} role={role:?}"
                );
            }
        }
    }
}

#[test]
fn guest_override_wins_even_over_admin_role() {
    let session = resolve_session(&flags(true, None), &settled(Some(UserRole::Admin)));
    assert!(!session.is_signed_in);
    assert_eq!(session.role, UserRole::Guest);
}

#[test]
fn plain_user_role_signs_in_without_alternate_auth() {
    let session = resolve_session(&flags(false, None), &settled(Some(UserRole::User)));
    assert!(session.is_signed_in);
    assert_eq!(session.role, UserRole::User);
}

#[test]
fn alternate_auth_signs_in_without_any_remote_role() {
    let session = resolve_session(&flags(false, Some(AuthMethod::Phone)), &settled(None));
    assert!(session.is_signed_in);
    assert_eq!(session.role, UserRole::Guest);
}

/// The fetch path substitutes `Guest` when the role query fails, so a
/// network error resolves to a signed-out guest with no error surfaced.
#[test]
fn failed_role_query_degrades_to_guest() {
    let session = resolve_session(&flags(false, None), &settled(Some(UserRole::Guest)));
    assert!(!session.is_signed_in);
    assert_eq!(session.role, UserRole::Guest);
}

#[test]
fn unresolved_query_defaults_role_to_guest() {
    let pending = RoleQuery {
        data: None,
        is_loading: true,
        is_fetched: false,
    };
    let session = resolve_session(&SessionFlags::default(), &pending);
    assert_eq!(session.role, UserRole::Guest);
    assert!(!session.is_signed_in);
    assert!(session.is_loading);
    assert!(!session.is_fetched);
}

#[test]
fn loading_state_is_surfaced_under_guest_override() {
    let pending = RoleQuery {
        data: None,
        is_loading: true,
        is_fetched: false,
    };
    let session = resolve_session(&flags(true, None), &pending);
    assert!(session.is_loading);
    assert!(!session.is_signed_in);
}

#[test]
fn enable_guest_mode_is_idempotent() {
    let mut flags = SessionFlags::default();
    flags.enable_guest_mode();
    assert!(flags.guest_mode);
    flags.enable_guest_mode();
    assert!(flags.guest_mode);
}

#[test]
fn complete_sign_in_clears_guest_override() {
    let mut flags = SessionFlags::default();
    flags.enable_guest_mode();
    flags.complete_sign_in(AuthMethod::Phone, Some("9000000001".to_owned()));
    assert!(!flags.guest_mode);
    assert_eq!(flags.auth_method, Some(AuthMethod::Phone));
    assert_eq!(flags.auth_identity.as_deref(), Some("9000000001"));
}

#[test]
fn sign_out_clears_both_flags_from_any_prior_state() {
    for guest_mode in [false, true] {
        for auth_method in [None, Some(AuthMethod::Email)] {
            let mut state = flags(guest_mode, auth_method);
            state.sign_out();
            assert_eq!(state, SessionFlags::default());
        }
    }
}

#[test]
fn auth_method_tokens_round_trip() {
    for method in [AuthMethod::Email, AuthMethod::Google, AuthMethod::Phone] {
        assert_eq!(AuthMethod::parse(method.as_str()), Some(method));
    }
    assert_eq!(AuthMethod::parse("password"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_flags_reads_unset_outside_the_browser() {
    assert_eq!(load_flags(), SessionFlags::default());
}
