use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_no_toast() {
    let state = UiState::default();
    assert!(state.toast.is_none());
}

// =============================================================
// Raising toasts
// =============================================================

#[test]
fn show_success_carries_message_and_kind() {
    let mut state = UiState::default();
    state.show_success("Welcome, Jane");
    let toast = state.toast.expect("toast");
    assert_eq!(toast.message, "Welcome, Jane");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn show_error_carries_message_and_kind() {
    let mut state = UiState::default();
    state.show_error("Invalid credentials");
    let toast = state.toast.expect("toast");
    assert_eq!(toast.message, "Invalid credentials");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn each_toast_gets_a_fresh_id() {
    let mut state = UiState::default();
    state.show_success("first");
    let first = state.toast.as_ref().expect("toast").id;
    state.show_error("second");
    let second = state.toast.as_ref().expect("toast").id;
    assert_ne!(first, second);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_clears_the_matching_toast() {
    let mut state = UiState::default();
    state.show_success("done");
    let id = state.toast.as_ref().expect("toast").id;
    state.dismiss(id);
    assert!(state.toast.is_none());
}

#[test]
fn stale_dismiss_does_not_clear_a_newer_toast() {
    // A timer started for an earlier toast must not remove its
    // replacement.
    let mut state = UiState::default();
    state.show_success("first");
    let stale = state.toast.as_ref().expect("toast").id;

    state.show_error("second");
    state.dismiss(stale);

    let toast = state.toast.expect("newer toast survives");
    assert_eq!(toast.message, "second");
}

#[test]
fn dismiss_on_empty_state_is_a_no_op() {
    let mut state = UiState::default();
    state.dismiss(42);
    assert!(state.toast.is_none());
}
