//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a failure
//! is shown inline (forms) or swallowed into a logged-out state (validator).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP calls are only made from the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses, i.e. an expired or invalid credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// Build an [`ApiError::Status`] from a failed response, preferring the
/// server's own `msg`/`error`/`message` text over a generic one.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg.or(b.error).or(b.message))
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}
