use super::*;

#[test]
fn default_endpoints_live_under_api_prefix() {
    let config = ApiConfig::default();
    assert_eq!(config.endpoint("/profile"), "/api/profile");
    assert_eq!(config.endpoint("login"), "/api/login");
    assert_eq!(config.endpoint("/register"), "/api/register");
}

#[test]
fn endpoint_with_empty_base_is_root_relative() {
    assert_eq!(ApiConfig::new("").endpoint("/profile"), "/profile");
}

#[test]
fn endpoint_joins_base_with_single_slash() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(config.endpoint("/profile"), "https://api.example.com/profile");
    assert_eq!(ApiConfig::new("/api").endpoint("register"), "/api/register");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let config = ApiConfig::default();
    let result = futures::executor::block_on(fetch_profile(&config, "t"));
    assert_eq!(result, Err(ApiError::Unavailable));

    let request = LoginRequest { username: "a".to_owned(), password: "b".to_owned() };
    let result = futures::executor::block_on(login(&config, &request));
    assert_eq!(result, Err(ApiError::Unavailable));
}
