//! Normalization of loosely shaped auth responses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, register and refresh responses have placed the token and the user
//! object at different paths across backend versions. Each value is located by
//! walking an ordered list of candidate paths and taking the first hit.
//!
//! Everything here is pure over `serde_json::Value`; storage and networking
//! live elsewhere.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::{Map, Value};

use super::types::UserRecord;
use crate::error::AuthError;

/// A path into a JSON document, as object keys from the root.
pub type JsonPath = &'static [&'static str];

pub const ACCESS_TOKEN_PATHS: &[JsonPath] = &[&["data", "accessToken"], &["accessToken"], &["token"], &["data", "token"]];

pub const REFRESH_TOKEN_PATHS: &[JsonPath] = &[&["data", "refreshToken"], &["refreshToken"]];

/// The empty path denotes the document root.
pub const USER_PATHS: &[JsonPath] = &[&["data", "user"], &["user"], &["data"], &[]];

pub const ERROR_MESSAGE_PATHS: &[JsonPath] = &[&["message"], &["error"], &["data", "message"]];

/// Keys removed from a user object before it is persisted.
pub const SECRET_KEYS: &[&str] = &["password", "accessToken", "refreshToken", "token"];

/// Credentials and profile extracted from one auth response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthPayload {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: UserRecord,
}

/// Follow `path` from `root`; `None` if any segment is missing.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(key))
}

/// First value among `paths` accepted by `accept`, in priority order.
pub fn first_match<'a, T>(
    root: &'a Value,
    paths: &[JsonPath],
    accept: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths.iter().find_map(|path| lookup(root, *path).and_then(&accept))
}

fn non_empty_str(value: &Value) -> Option<String> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

pub fn extract_access_token(raw: &Value) -> Option<String> {
    first_match(raw, ACCESS_TOKEN_PATHS, non_empty_str)
}

pub fn extract_refresh_token(raw: &Value) -> Option<String> {
    first_match(raw, REFRESH_TOKEN_PATHS, non_empty_str)
}

/// Locate the user object and decode it with secrets removed.
///
/// A candidate only counts if it is an object that still carries an identity
/// field after sanitizing; a bare `{success, accessToken}` envelope does not.
pub fn extract_user(raw: &Value) -> Option<UserRecord> {
    first_match(raw, USER_PATHS, |candidate| {
        let object = candidate.as_object()?;
        let user: UserRecord = serde_json::from_value(Value::Object(sanitize_user(object))).ok()?;
        user.has_identity().then_some(user)
    })
}

/// Copy of `object` without any [`SECRET_KEYS`].
pub fn sanitize_user(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !SECRET_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Extract the full credential set from a login/register response.
///
/// # Errors
///
/// Returns [`AuthError::MalformedResponse`] when no access token or no
/// identifiable user object can be found.
pub fn normalize_auth_response(raw: &Value) -> Result<AuthPayload, AuthError> {
    let access_token = extract_access_token(raw).ok_or(AuthError::MalformedResponse("missing access token"))?;
    let user = extract_user(raw).ok_or(AuthError::MalformedResponse("missing user object"))?;
    Ok(AuthPayload { access_token, refresh_token: extract_refresh_token(raw), user })
}

/// The `message` field of an error body, if any.
pub fn error_message(raw: &Value) -> Option<String> {
    first_match(raw, ERROR_MESSAGE_PATHS, non_empty_str)
}
