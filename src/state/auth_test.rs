use super::*;
use crate::net::types::User;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(state.user_name().is_none());
}

#[test]
fn auth_state_default_not_submitting() {
    let state = AuthState::default();
    assert!(!state.submitting);
}

fn logged_in(email: Option<&str>, phone: Option<&str>) -> AuthState {
    AuthState {
        session: Some(Session {
            token: "t".to_owned(),
            user: User {
                id: "1".to_owned(),
                name: "Jane".to_owned(),
                role: "customer".to_owned(),
                email: email.map(str::to_owned),
                phone: phone.map(str::to_owned),
            },
        }),
        submitting: false,
    }
}

#[test]
fn user_name_reads_session_user() {
    assert_eq!(logged_in(None, None).user_name(), Some("Jane"));
}

// =============================================================
// Home page helpers
// =============================================================

#[test]
fn greeting_names_the_user_when_logged_in() {
    assert_eq!(logged_in(None, None).greeting(), "Welcome back, Jane");
    assert_eq!(AuthState::default().greeting(), "Welcome back");
}

#[test]
fn contact_prefers_email_over_phone() {
    assert_eq!(
        logged_in(Some("user@example.com"), Some("9876543210")).contact().as_deref(),
        Some("user@example.com")
    );
    assert_eq!(logged_in(None, Some("9876543210")).contact().as_deref(), Some("9876543210"));
    assert_eq!(logged_in(None, None).contact(), None);
    assert_eq!(AuthState::default().contact(), None);
}
