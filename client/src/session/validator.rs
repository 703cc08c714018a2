//! Mount-time validation of the stored session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page calls [`validate_session`] once per mount. The outcome
//! drives the page-local auth flag and, on rejection, a redirect home.
//!
//! DESIGN
//! ======
//! One best-effort check: no retry, no backoff, no timeout. The function
//! owns the credential purge so a rejected token is gone from storage before
//! any caller can observe the logged-out outcome.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use crate::net::error::ApiError;
use crate::session::store::{SessionStore, clear_credential, load_credential};

/// Capability to ask the backend whether a bearer token is still live.
#[allow(async_fn_in_trait)]
pub trait ProfileCheck {
    /// Resolve `Ok(())` when the profile endpoint accepts `token`.
    async fn check(&self, token: &str) -> Result<(), ApiError>;
}

/// Result of one validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// No credential stored; no request was made.
    Anonymous,
    /// The profile endpoint accepted the stored credential.
    Authenticated,
    /// The credential was rejected (or the check failed) and has been purged.
    Rejected(ApiError),
}

impl ValidationOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Only a rejected credential sends the user back to the landing route.
    pub fn requires_redirect(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Check the stored credential against the profile endpoint.
///
/// Transport failures are treated the same as an explicit rejection.
pub async fn validate_session<S, P>(store: &S, profile: &P) -> ValidationOutcome
where
    S: SessionStore,
    P: ProfileCheck,
{
    let Some(credential) = load_credential(store) else {
        return ValidationOutcome::Anonymous;
    };

    match profile.check(&credential.token).await {
        Ok(()) => ValidationOutcome::Authenticated,
        Err(err) => {
            log::warn!("invalid or expired token: {err}");
            clear_credential(store);
            ValidationOutcome::Rejected(err)
        }
    }
}
