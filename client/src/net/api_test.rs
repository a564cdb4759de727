use super::*;
use serde_json::json;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn rejection_carries_server_message() {
    let err = rejection(401, &json!({"success": false, "message": "Invalid credentials"}));
    assert_eq!(err, AuthError::InvalidCredentials { status: 401, message: Some("Invalid credentials".to_owned()) });
}

#[test]
fn rejection_without_body_has_no_message() {
    let err = rejection(502, &Value::Null);
    assert_eq!(err, AuthError::InvalidCredentials { status: 502, message: None });
    assert_eq!(err.user_message(), crate::error::GENERIC_LOGIN_FAILURE);
}

#[test]
fn http_gateway_uses_configured_base() {
    let gateway = HttpGateway::new(ClientConfig { api_base_url: "http://api.test".to_owned() });
    assert_eq!(gateway.config().auth_endpoint("refresh"), "http://api.test/auth/refresh");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_gateway_is_unavailable_off_browser() {
    let gateway = HttpGateway::default();
    let result = futures::executor::block_on(gateway.login(&LoginRequest::default()));
    assert!(matches!(result, Err(AuthError::Network(_))));
}
