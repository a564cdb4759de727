//! Error taxonomy for the auth boundary.
//!
//! ERROR HANDLING
//! ==============
//! Gateway and session failures are typed here and resolved into a display
//! string with [`AuthError::user_message`]. Pages render that string; nothing
//! in this crate panics on a failed login or a corrupted session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Generic message shown when the server gave no usable explanation.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed";

/// Errors produced by login, registration, refresh and profile calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request rejected: status {status}")]
    InvalidCredentials { status: u16, message: Option<String> },

    /// A success response without an extractable token or user.
    #[error("malformed auth response: {0}")]
    MalformedResponse(&'static str),

    /// The refresh exchange failed; the session has been cleared.
    #[error("session expired")]
    AuthExpired,

    /// Credentials were valid but could not be persisted locally.
    #[error("session could not be saved: {0}")]
    StorageUnavailable(StorageError),
}

impl AuthError {
    /// Stable machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::InvalidCredentials { .. } => "E_INVALID_CREDENTIALS",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
            Self::AuthExpired => "E_AUTH_EXPIRED",
            Self::StorageUnavailable(_) => "E_STORAGE_UNAVAILABLE",
        }
    }

    /// Text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to reach the server. Check your connection and try again.".to_owned(),
            Self::InvalidCredentials { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            Self::InvalidCredentials { .. } => GENERIC_LOGIN_FAILURE.to_owned(),
            Self::MalformedResponse(_) => "Unexpected response from server.".to_owned(),
            Self::AuthExpired => "Your session has expired. Please sign in again.".to_owned(),
            Self::StorageUnavailable(_) => {
                "Unable to save your session. Check that browser storage is enabled.".to_owned()
            }
        }
    }
}

/// Failures of the persistent key-value layer beneath the session store.
///
/// Read failures never leave [`crate::state::session::SessionStore`]; they are
/// logged there and treated as "no session". A failed write while storing a
/// fresh login surfaces as [`AuthError::StorageUnavailable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("stored value corrupted: {0}")]
    Corrupted(String),
}
