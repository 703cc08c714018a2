//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth and profile
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::status_error;
use super::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::session::validator::ProfileCheck;

/// Path prefix the landing server forwards to the backend API.
pub const DEFAULT_API_BASE: &str = "/api";

/// Location of the backend API. Provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix joined in front of every endpoint path.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    status_error(status, &body)
}

/// Check a bearer token against `GET /profile`. Any 2xx counts as valid;
/// the body is ignored.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when no response arrives and
/// [`ApiError::Status`] for non-2xx responses.
pub async fn fetch_profile(config: &ApiConfig, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint("/profile"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Exchange username and password for a bearer token via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the
/// credentials, or the response lacks a token.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("/login"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the
/// registration (duplicate username, invalid email, ...).
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("/register"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// [`ProfileCheck`] backed by the real `GET /profile` endpoint.
#[derive(Clone, Debug, Default)]
pub struct HttpProfileCheck {
    config: ApiConfig,
}

impl HttpProfileCheck {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ProfileCheck for HttpProfileCheck {
    async fn check(&self, token: &str) -> Result<(), ApiError> {
        fetch_profile(&self.config, token).await
    }
}
