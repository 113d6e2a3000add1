use super::*;
use crate::net::types::UserRole;

fn session(is_signed_in: bool, is_loading: bool) -> DerivedSession {
    DerivedSession {
        is_signed_in,
        role: if is_signed_in { UserRole::User } else { UserRole::Guest },
        is_loading,
        is_fetched: !is_loading,
    }
}

#[test]
fn loading_session_shows_placeholder() {
    assert_eq!(decide(&session(false, true)), GateDecision::Loading);
}

#[test]
fn loading_wins_even_when_already_signed_in() {
    assert_eq!(decide(&session(true, true)), GateDecision::Loading);
}

#[test]
fn signed_in_session_renders_children() {
    assert_eq!(decide(&session(true, false)), GateDecision::Allow);
}

#[test]
fn signed_out_session_prompts() {
    assert_eq!(decide(&session(false, false)), GateDecision::Prompt);
}
