use super::*;

#[test]
fn invalid_credentials_surfaces_server_message() {
    let err = AuthError::InvalidCredentials { status: 401, message: Some("Bad username or password".to_owned()) };
    assert_eq!(err.user_message(), "Bad username or password");
}

#[test]
fn invalid_credentials_without_message_is_generic() {
    let err = AuthError::InvalidCredentials { status: 500, message: None };
    assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
}

#[test]
fn invalid_credentials_blank_message_is_generic() {
    let err = AuthError::InvalidCredentials { status: 400, message: Some("   ".to_owned()) };
    assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
}

#[test]
fn network_error_mentions_connection() {
    let err = AuthError::Network("connection refused".to_owned());
    assert!(err.user_message().contains("connection"));
    assert_eq!(err.error_code(), "E_NETWORK");
}

#[test]
fn malformed_response_is_generic_to_user() {
    let err = AuthError::MalformedResponse("missing access token");
    assert_eq!(err.user_message(), "Unexpected response from server.");
    assert!(err.to_string().contains("missing access token"));
}

#[test]
fn auth_expired_code() {
    assert_eq!(AuthError::AuthExpired.error_code(), "E_AUTH_EXPIRED");
}

#[test]
fn storage_unavailable_wraps_storage_error() {
    let err = AuthError::StorageUnavailable(StorageError::Write("quota exceeded".to_owned()));
    assert_eq!(err.error_code(), "E_STORAGE_UNAVAILABLE");
    assert!(err.to_string().contains("quota exceeded"));
    assert!(err.user_message().contains("browser storage"));
}
