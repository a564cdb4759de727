//! Wire DTOs for the FarmTech REST auth boundary.
//!
//! DESIGN
//! ======
//! The backend is a Spring service that serializes `Long` ids as numbers and
//! timestamps in several shapes. Deserialization here is lenient on those
//! fields so a profile never fails to load over a formatting difference.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Sanitized user profile as persisted in the session.
///
/// Never carries a password or token; see
/// [`crate::net::normalize::sanitize_user`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier. `AuthResponse` payloads name it `userId`.
    #[serde(default, alias = "userId", deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub phone_number: Option<String>,
    /// Raw role tag as sent by the server, e.g. `"VETERINARY"`.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_login_date: Option<String>,
}

impl UserRecord {
    /// True when at least one identity field is populated.
    pub fn has_identity(&self) -> bool {
        self.id.is_some() || !self.username.is_empty() || !self.email.is_empty()
    }

    /// Name to greet the user with: full name when known, else username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            full
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: String,
}

/// Accept a string or a number; anything else (including `null`) is `None`.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Like [`deserialize_lenient_string`], with `null` and other shapes read as
/// an empty string.
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_lenient_string(deserializer).map(Option::unwrap_or_default)
}
