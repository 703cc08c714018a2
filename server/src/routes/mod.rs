//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the static asset routes and the Leptos SSR app under one Axum
//! router. Paths under `/api/` never fall through to the app shell: with
//! an upstream configured they are forwarded to the backend, otherwise they
//! answer 404.

pub mod proxy;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use proxy::ApiProxy;

/// Static assets, health check, and the `/api` proxy or guard.
fn static_routes(config: &ServerConfig) -> Result<Router, ConfigError> {
    let api = match &config.api_upstream {
        Some(upstream) => any(proxy::forward).with_state(Arc::new(ApiProxy::new(upstream)?)),
        None => any(api_not_found),
    };
    Ok(Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(api_not_found))
        .route("/api/{*rest}", api)
        .route_service("/favicon.png", ServeFile::new(config.favicon()))
        .nest_service("/img", ServeDir::new(&config.asset_dir))
        .nest_service("/pkg", ServeDir::new(config.pkg_dir())))
}

/// Full application router: static routes first, then Leptos SSR with the
/// file/error handler as fallback.
///
/// # Errors
///
/// Returns [`ConfigError::HttpClient`] if the `/api` proxy cannot be built.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Result<Router, ConfigError> {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(static_routes(config)?
        .merge(leptos_router)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn api_not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::debug!(%uri, "unmatched api path");
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
