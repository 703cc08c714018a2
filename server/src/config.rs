//! Server configuration parsed from the Leptos options and environment.
//!
//! The Leptos site root comes from `[workspace.metadata.leptos]` (or the
//! `LEPTOS_*` variables cargo-leptos exports). Optional overrides:
//! - `LANDING_SITE_ROOT`: directory holding `pkg/` and `favicon.png`
//! - `LANDING_ASSET_DIR`: directory served under `/img` (default `<site_root>/img`)
//! - `LANDING_API_UPSTREAM`: backend base URL that `/api/*` is forwarded to;
//!   unset means `/api/*` answers 404

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const SITE_ROOT_VAR: &str = "LANDING_SITE_ROOT";
pub const ASSET_DIR_VAR: &str = "LANDING_ASSET_DIR";
pub const API_UPSTREAM_VAR: &str = "LANDING_API_UPSTREAM";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("{var} is set but empty")]
    EmptyVar { var: &'static str },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUpstream { var: &'static str, value: String },
    #[error("http client: {0}")]
    HttpClient(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Root of the built site (`pkg/`, `favicon.png`).
    pub site_root: PathBuf,
    /// Directory served under `/img`.
    pub asset_dir: PathBuf,
    /// Backend base URL for the `/api` proxy.
    pub api_upstream: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyVar`] when an override is present but
    /// blank, and [`ConfigError::InvalidUpstream`] for a non-http upstream.
    pub fn from_env(default_site_root: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(default_site_root, |key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(default_site_root: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_root = match non_empty(&lookup, SITE_ROOT_VAR)? {
            Some(root) => PathBuf::from(root),
            None => PathBuf::from(default_site_root),
        };
        let asset_dir = match non_empty(&lookup, ASSET_DIR_VAR)? {
            Some(dir) => PathBuf::from(dir),
            None => site_root.join("img"),
        };
        let api_upstream = match non_empty(&lookup, API_UPSTREAM_VAR)? {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Some(url.trim_end_matches('/').to_owned())
            }
            Some(value) => return Err(ConfigError::InvalidUpstream { var: API_UPSTREAM_VAR, value }),
            None => None,
        };
        Ok(Self { site_root, asset_dir, api_upstream })
    }

    pub fn pkg_dir(&self) -> PathBuf {
        self.site_root.join("pkg")
    }

    pub fn favicon(&self) -> PathBuf {
        self.site_root.join("favicon.png")
    }
}

fn non_empty<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar { var }),
        Some(value) => Ok(Some(value.trim().to_owned())),
    }
}
