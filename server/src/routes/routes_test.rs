use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use tower::ServiceExt;

use super::*;

/// Fresh site root under the system temp dir with a favicon and one image.
fn site_fixture(name: &str) -> ServerConfig {
    let root: PathBuf = std::env::temp_dir().join(format!("landing-server-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("img")).expect("create img dir");
    std::fs::create_dir_all(root.join("pkg")).expect("create pkg dir");
    std::fs::write(root.join("favicon.png"), b"png").expect("write favicon");
    std::fs::write(root.join("img").join("logo_410.png"), b"logo").expect("write image");
    ServerConfig { asset_dir: root.join("img"), site_root: root, api_upstream: None }
}

async fn status_of(router: Router, path: &str) -> StatusCode {
    let request = Request::builder().uri(path).body(Body::empty()).expect("request");
    router.oneshot(request).await.expect("response").status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let config = site_fixture("healthz");
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn api_paths_are_not_found() {
    let config = site_fixture("api");
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/api").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/api/unknown/thing").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn favicon_is_served_from_site_root() {
    let config = site_fixture("favicon");
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/favicon.png").await, StatusCode::OK);
}

#[tokio::test]
async fn images_are_served_from_asset_dir() {
    let config = site_fixture("img");
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/img/logo_410.png").await, StatusCode::OK);
    assert_eq!(status_of(static_routes(&config).expect("routes"), "/img/missing.png").await, StatusCode::NOT_FOUND);
}

/// Stand-in backend on an ephemeral port: `/profile` accepts only
/// `Bearer good`, `/login` echoes its body.
async fn spawn_backend() -> String {
    let backend = Router::new()
        .route(
            "/profile",
            get(|headers: HeaderMap| async move {
                match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                    Some("Bearer good") => (StatusCode::OK, r#"{"username":"alice"}"#),
                    _ => (StatusCode::UNAUTHORIZED, r#"{"msg":"Token has expired"}"#),
                }
            }),
        )
        .route("/login", post(|body: String| async move { body }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, backend).await;
    });
    format!("http://{addr}")
}

async fn proxied_fixture(name: &str) -> Router {
    let mut config = site_fixture(name);
    config.api_upstream = Some(spawn_backend().await);
    static_routes(&config).expect("routes")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn client_profile_endpoint_reaches_backend_with_token() {
    let router = proxied_fixture("proxy-ok").await;
    let path = client::net::api::ApiConfig::default().endpoint("/profile");
    let request = Request::builder()
        .uri(path)
        .header(AUTHORIZATION, "Bearer good")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"username":"alice"}"#);
}

#[tokio::test]
async fn rejected_token_status_passes_through() {
    let router = proxied_fixture("proxy-401").await;
    let request = Request::builder()
        .uri("/api/profile")
        .header(AUTHORIZATION, "Bearer stale")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Token has expired"));
}

#[tokio::test]
async fn request_body_is_forwarded() {
    let router = proxied_fixture("proxy-body").await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"username":"a","password":"b"}"#))
        .expect("request");
    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"username":"a","password":"b"}"#);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let mut config = site_fixture("proxy-down");
    // Bind then drop so nothing listens on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    config.api_upstream = Some(format!("http://{addr}"));
    let router = static_routes(&config).expect("routes");
    assert_eq!(status_of(router, "/api/profile").await, StatusCode::BAD_GATEWAY);
}
