//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Derived on every landing-page mount from the stored credential. The blog
//! action reads it to decide between navigating and prompting for login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::validator::ValidationOutcome;
use crate::util::lifecycle::MountGuard;

/// Route a rejected session is sent back to.
pub const HOME_ROUTE: &str = "/";

/// Page-local authentication flag. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Settle the state from a validation outcome. Only `Authenticated`
    /// yields `authenticated = true`.
    pub fn apply(&mut self, outcome: &ValidationOutcome) {
        self.authenticated = outcome.is_authenticated();
    }

    /// Mark the session as logged in after a successful login form submit.
    pub fn sign_in(&mut self) {
        self.authenticated = true;
    }
}

/// Apply a finished validation to the page.
///
/// Does nothing once `guard` is released. Otherwise updates `state` and,
/// for a rejected credential, calls `navigate` with [`HOME_ROUTE`] exactly
/// once. Returns whether the outcome was applied.
pub fn settle<N>(outcome: &ValidationOutcome, guard: &MountGuard, state: &mut AuthState, navigate: N) -> bool
where
    N: FnOnce(&'static str),
{
    if !guard.is_mounted() {
        return false;
    }
    state.apply(outcome);
    if outcome.requires_redirect() {
        navigate(HOME_ROUTE);
    }
    true
}
