//! Persisted authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single owner of the access token, refresh token and
//! sanitized user profile. The app opens one store at startup and hands it to
//! the UI through context; tests open isolated stores over `MemoryStorage`.
//!
//! DESIGN
//! ======
//! Three entries live in the backend. All reads and writes go through one
//! mutex, so a reader never observes a half-written session. The lock is never
//! held across an `.await`.
//!
//! The access token is authoritative: a cached user without a token is
//! discarded on read.
//!
//! ERROR HANDLING
//! ==============
//! Unreadable or corrupted entries are logged, the whole session is cleared,
//! and the caller sees "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::role::Role;
use super::storage::SessionBackend;
use crate::error::{AuthError, StorageError};
use crate::net::api::AuthGateway;
use crate::net::normalize::{self, AuthPayload};
use crate::net::types::UserRecord;

pub const ACCESS_TOKEN_KEY: &str = "farmtech.auth.access_token";
pub const REFRESH_TOKEN_KEY: &str = "farmtech.auth.refresh_token";
pub const USER_KEY: &str = "farmtech.auth.user";

const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Immutable view of the session for routing and rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub user: Option<UserRecord>,
    /// `user.role` after alias normalization.
    pub role: Option<Role>,
}

impl SessionSnapshot {
    pub fn signed_out() -> Self {
        Self::default()
    }
}

pub struct SessionStore<B: SessionBackend> {
    backend: Mutex<B>,
}

impl<B: SessionBackend> SessionStore<B> {
    /// Open a store over `backend`, discarding any corrupted persisted state.
    pub fn open(backend: B) -> Self {
        let store = Self { backend: Mutex::new(backend) };
        {
            let mut backend = store.lock();
            read_user(&mut *backend);
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, B> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Normalize an auth response and persist it, replacing any prior session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedResponse`] if the response has no token or
    /// user (nothing is written), or [`AuthError::StorageUnavailable`] if the
    /// backend rejects the write (the session is left cleared).
    pub fn store(&self, raw: &Value) -> Result<AuthPayload, AuthError> {
        let payload = normalize::normalize_auth_response(raw)?;
        let user_json = serde_json::to_string(&payload.user)
            .map_err(|e| AuthError::StorageUnavailable(StorageError::Write(e.to_string())))?;

        let mut backend = self.lock();
        if let Err(err) = write_session(&mut *backend, &payload, &user_json) {
            log::warn!("failed to persist session: {err}");
            clear_entries(&mut *backend);
            return Err(AuthError::StorageUnavailable(err));
        }
        log::info!("session stored for {}", payload.user.username);
        Ok(payload)
    }

    pub fn token(&self) -> Option<String> {
        let mut backend = self.lock();
        read_token(&mut *backend, ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        let mut backend = self.lock();
        read_token(&mut *backend, REFRESH_TOKEN_KEY)
    }

    /// The cached user, if well-formed and backed by an access token.
    pub fn user(&self) -> Option<UserRecord> {
        let mut backend = self.lock();
        read_user(&mut *backend)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() || self.user().is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut backend = self.lock();
        let user = read_user(&mut *backend);
        let token = read_token(&mut *backend, ACCESS_TOKEN_KEY);
        let role = user.as_ref().and_then(|u| u.role.as_deref()).and_then(Role::parse);
        SessionSnapshot { authenticated: token.is_some() || user.is_some(), user, role }
    }

    /// Remove every session entry. Never fails.
    pub fn clear(&self) {
        let mut backend = self.lock();
        clear_entries(&mut *backend);
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthExpired`] on any failure. The session is cleared
    /// unless it was replaced by a different login while the call was in flight.
    pub async fn refresh<G: AuthGateway>(&self, gateway: &G) -> Result<String, AuthError> {
        let Some(refresh_token) = self.refresh_token() else {
            log::info!("refresh requested without a refresh token");
            self.clear();
            return Err(AuthError::AuthExpired);
        };

        let raw = match gateway.refresh(&refresh_token).await {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("token refresh failed ({}): {err}", err.error_code());
                self.clear_if_current(&refresh_token);
                return Err(AuthError::AuthExpired);
            }
        };
        let Some(access_token) = normalize::extract_access_token(&raw) else {
            log::warn!("token refresh response carried no access token");
            self.clear_if_current(&refresh_token);
            return Err(AuthError::AuthExpired);
        };
        let rotated = normalize::extract_refresh_token(&raw);

        let mut backend = self.lock();
        if !holds_refresh_token(&mut *backend, &refresh_token) {
            log::info!("session changed during refresh; discarding refreshed token");
            return Err(AuthError::AuthExpired);
        }
        if let Err(err) = write_tokens(&mut *backend, &access_token, rotated.as_deref()) {
            log::warn!("failed to persist refreshed token: {err}");
            clear_entries(&mut *backend);
            return Err(AuthError::AuthExpired);
        }
        Ok(access_token)
    }

    /// Clear the session only if it still belongs to `refresh_token`.
    fn clear_if_current(&self, refresh_token: &str) {
        let mut backend = self.lock();
        if holds_refresh_token(&mut *backend, refresh_token) {
            clear_entries(&mut *backend);
        } else {
            log::info!("session changed during refresh; keeping the newer session");
        }
    }

    /// The cached user, falling back to `GET /auth/me` when none is cached.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthExpired`] without an access token, the gateway
    /// error if the call fails, or [`AuthError::MalformedResponse`] if the
    /// response holds no user object.
    pub async fn ensure_user<G: AuthGateway>(&self, gateway: &G) -> Result<UserRecord, AuthError> {
        if let Some(user) = self.user() {
            return Ok(user);
        }
        let token = self.token().ok_or(AuthError::AuthExpired)?;
        let raw = gateway.current_user(&token).await?;
        let user = normalize::extract_user(&raw).ok_or(AuthError::MalformedResponse("missing user object"))?;
        let user_json = serde_json::to_string(&user)
            .map_err(|e| AuthError::StorageUnavailable(StorageError::Write(e.to_string())))?;

        let mut backend = self.lock();
        if read_token(&mut *backend, ACCESS_TOKEN_KEY).as_deref() != Some(token.as_str()) {
            return Err(AuthError::AuthExpired);
        }
        if let Err(err) = backend.set(USER_KEY, &user_json) {
            log::warn!("failed to cache profile: {err}");
        }
        Ok(user)
    }
}

fn write_session<B: SessionBackend>(backend: &mut B, payload: &AuthPayload, user_json: &str) -> Result<(), StorageError> {
    backend.set(ACCESS_TOKEN_KEY, &payload.access_token)?;
    match &payload.refresh_token {
        Some(token) => backend.set(REFRESH_TOKEN_KEY, token)?,
        None => backend.remove(REFRESH_TOKEN_KEY)?,
    }
    backend.set(USER_KEY, user_json)
}

/// Replace the access token, and the refresh token when the server rotated it.
fn write_tokens<B: SessionBackend>(backend: &mut B, access_token: &str, rotated: Option<&str>) -> Result<(), StorageError> {
    backend.set(ACCESS_TOKEN_KEY, access_token)?;
    if let Some(token) = rotated {
        backend.set(REFRESH_TOKEN_KEY, token)?;
    }
    Ok(())
}

fn holds_refresh_token<B: SessionBackend>(backend: &mut B, refresh_token: &str) -> bool {
    read_token(backend, REFRESH_TOKEN_KEY).as_deref() == Some(refresh_token)
}

fn clear_entries<B: SessionBackend>(backend: &mut B) {
    for key in SESSION_KEYS {
        if let Err(err) = backend.remove(key) {
            log::debug!("could not remove {key}: {err}");
        }
    }
}

/// Read a raw entry. Storage failures clear the session and read as absent.
fn read_entry<B: SessionBackend>(backend: &mut B, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(StorageError::Unavailable) => None,
        Err(err) => {
            log::warn!("session storage read failed for {key}: {err}");
            clear_entries(backend);
            None
        }
    }
}

fn read_token<B: SessionBackend>(backend: &mut B, key: &str) -> Option<String> {
    read_entry(backend, key).filter(|token| !token.trim().is_empty())
}

fn read_user<B: SessionBackend>(backend: &mut B) -> Option<UserRecord> {
    let raw = read_entry(backend, USER_KEY)?;
    let user = match parse_user(&raw) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("discarding stored session: {err}");
            clear_entries(backend);
            return None;
        }
    };
    if read_token(backend, ACCESS_TOKEN_KEY).is_none() {
        log::warn!("discarding cached user without an access token");
        clear_entries(backend);
        return None;
    }
    Some(user)
}

fn parse_user(raw: &str) -> Result<UserRecord, StorageError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| StorageError::Corrupted(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(StorageError::Corrupted("user entry is not an object".to_owned()));
    };
    let user: UserRecord = serde_json::from_value(Value::Object(normalize::sanitize_user(&object)))
        .map_err(|e| StorageError::Corrupted(e.to_string()))?;
    if user.has_identity() {
        Ok(user)
    } else {
        Err(StorageError::Corrupted("user entry has no identity".to_owned()))
    }
}
