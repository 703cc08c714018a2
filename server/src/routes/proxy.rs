//! Forwarding of `/api/*` requests to the backend service.
//!
//! The browser talks to the landing origin only; `/api/<rest>` is replayed
//! against `<upstream>/<rest>` with the method, body, query string, and the
//! auth/content headers. The backend's status and body come back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Request headers passed through to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

pub struct ApiProxy {
    http: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(upstream: &str) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .no_proxy()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, upstream: upstream.trim_end_matches('/').to_owned() })
    }

    /// Backend URL for the path captured after `/api/`.
    fn target(&self, rest: &str, query: Option<&str>) -> String {
        let rest = rest.trim_start_matches('/');
        match query {
            Some(query) => format!("{}/{rest}?{query}", self.upstream),
            None => format!("{}/{rest}", self.upstream),
        }
    }

    async fn send(&self, method: Method, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, reqwest::Error> {
        let mut request = self.http.request(method, url).body(body);
        for name in &FORWARDED_HEADERS {
            if let Some(value) = headers.get(name) {
                request = request.header(name.clone(), value.clone());
            }
        }

        let upstream = request.send().await?;
        let status = upstream.status();
        let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
        let body = upstream.bytes().await?;

        let mut response = (status, body).into_response();
        if let Some(content_type) = content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Ok(response)
    }
}

pub async fn forward(
    State(proxy): State<Arc<ApiProxy>>,
    Path(rest): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = proxy.target(&rest, uri.query());
    match proxy.send(method, &url, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%uri, error = %e, "api upstream failed");
            (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
        }
    }
}
