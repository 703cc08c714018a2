//! Landing site server: Leptos SSR plus static assets.
#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "landing server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // `None` picks up the values cargo-leptos exports into the environment.
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let config = ServerConfig::from_env(&leptos_options.site_root)?;
    tracing::info!(
        site_root = %config.site_root.display(),
        asset_dir = %config.asset_dir.display(),
        api_upstream = config.api_upstream.as_deref().unwrap_or("-"),
        "server configuration"
    );

    let app = routes::app(&config, leptos_options)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "landing server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
