use super::*;

fn proxy(upstream: &str) -> ApiProxy {
    ApiProxy::new(upstream).expect("proxy")
}

#[test]
fn target_appends_captured_path() {
    let proxy = proxy("http://127.0.0.1:5000/");
    assert_eq!(proxy.target("profile", None), "http://127.0.0.1:5000/profile");
    assert_eq!(proxy.target("/posts/3", None), "http://127.0.0.1:5000/posts/3");
}

#[test]
fn target_keeps_query_string() {
    let proxy = proxy("https://backend.example.com/api");
    assert_eq!(proxy.target("posts", Some("page=2")), "https://backend.example.com/api/posts?page=2");
}
