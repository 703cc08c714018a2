use super::*;
use crate::net::error::{ApiError, status_error};

fn settle_counting(outcome: &ValidationOutcome, guard: &MountGuard, state: &mut AuthState) -> (bool, Vec<&'static str>) {
    let mut routes = Vec::new();
    let applied = settle(outcome, guard, state, |route| routes.push(route));
    (applied, routes)
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    assert!(!AuthState::default().authenticated);
}

#[test]
fn apply_authenticated_sets_flag() {
    let mut state = AuthState::default();
    state.apply(&ValidationOutcome::Authenticated);
    assert!(state.authenticated);
}

#[test]
fn apply_rejected_clears_previous_authentication() {
    let mut state = AuthState { authenticated: true };
    state.apply(&ValidationOutcome::Rejected(ApiError::Transport("offline".to_owned())));
    assert!(!state.authenticated);
}

#[test]
fn sign_in_sets_flag() {
    let mut state = AuthState::default();
    state.sign_in();
    assert!(state.authenticated);
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_rejected_navigates_home_exactly_once() {
    let guard = MountGuard::new();
    let mut state = AuthState { authenticated: true };
    let outcome = ValidationOutcome::Rejected(status_error(401, r#"{"msg":"Token has expired"}"#));

    let (applied, routes) = settle_counting(&outcome, &guard, &mut state);

    assert!(applied);
    assert!(!state.authenticated);
    assert_eq!(routes, vec!["/"]);
}

#[test]
fn settle_authenticated_does_not_navigate() {
    let guard = MountGuard::new();
    let mut state = AuthState::default();

    let (applied, routes) = settle_counting(&ValidationOutcome::Authenticated, &guard, &mut state);

    assert!(applied);
    assert!(state.authenticated);
    assert!(routes.is_empty());
}

#[test]
fn settle_anonymous_does_not_navigate() {
    let guard = MountGuard::new();
    let mut state = AuthState::default();

    let (applied, routes) = settle_counting(&ValidationOutcome::Anonymous, &guard, &mut state);

    assert!(applied);
    assert!(!state.authenticated);
    assert!(routes.is_empty());
}

#[test]
fn settle_after_unmount_leaves_state_and_does_not_navigate() {
    let guard = MountGuard::new();
    guard.release();

    let cases = [
        (ValidationOutcome::Authenticated, AuthState { authenticated: false }),
        (ValidationOutcome::Rejected(ApiError::Transport("offline".to_owned())), AuthState { authenticated: true }),
    ];
    for (outcome, start) in cases {
        let mut state = start.clone();
        let (applied, routes) = settle_counting(&outcome, &guard, &mut state);
        assert!(!applied);
        assert_eq!(state, start);
        assert!(routes.is_empty());
    }
}
