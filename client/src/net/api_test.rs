use super::*;
use futures::executor::block_on;

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiClient::new("http://localhost:5000//").url(RELOAD_PATH), "http://localhost:5000/auth/reload");
}

#[test]
fn url_joins_absolute_and_relative_paths() {
    let api = ApiClient::new("https://api.glasseson.test/v1/");
    assert_eq!(api.url(LOGIN_PATH), "https://api.glasseson.test/v1/auth/login");
    assert_eq!(api.url("auth/reload"), "https://api.glasseson.test/v1/auth/reload");
}

#[test]
fn from_config_uses_configured_base_url() {
    let config = ClientConfig { api_base_url: "http://backend:8080".to_owned() };
    assert_eq!(ApiClient::from_config(&config).url(LOGOUT_PATH), "http://backend:8080/auth/logout");
}

#[test]
fn endpoint_paths() {
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(LOGOUT_PATH, "/auth/logout");
    assert_eq!(REFRESH_TOKEN_PATH, "/auth/refresh-token");
    assert_eq!(RELOAD_PATH, "/auth/reload");
}

#[test]
fn decode_body_parses_auth_user() {
    let user: AuthUser = decode_body(
        r#"{"username":"ada","email":"ada@example.com","role":"user","accessToken":"t"}"#,
    )
    .unwrap();
    assert_eq!(user.access_token, "t");
}

#[test]
fn decode_body_treats_empty_as_null() {
    let value: serde_json::Value = decode_body("  ").unwrap();
    assert!(value.is_null());
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let result = decode_body::<AuthUser>(r#"{"username":"ada"}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn verbs_are_unavailable_outside_browser() {
    let api = ApiClient::new("http://localhost:5000");
    assert_eq!(block_on(api.get::<serde_json::Value>(RELOAD_PATH)), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.logout()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.refresh_token()), Err(ApiError::Unavailable));
}
