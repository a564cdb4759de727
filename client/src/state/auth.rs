//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read `AuthState` from context. It is
//! a snapshot of the `SessionStore`, refreshed after every sign-in, sign-out
//! and startup restore; components never touch storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::role::{self, Role};
use super::session::{SessionSnapshot, SessionStore};
use super::storage::SessionBackend;
use crate::error::AuthError;
use crate::net::api::AuthGateway;
use crate::net::types::{LoginRequest, RegisterRequest, UserRecord};

/// Authentication state tracking the current session and loading status.
///
/// `loading` stays true until the persisted session has been read in the
/// browser; guards render nothing while it is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub snapshot: SessionSnapshot,
    pub loading: bool,
}

impl AuthState {
    /// State before the persisted session has been read.
    pub fn pending() -> Self {
        Self { snapshot: SessionSnapshot::signed_out(), loading: true }
    }

    /// Read the persisted session.
    pub fn restore<B: SessionBackend>(store: &SessionStore<B>) -> Self {
        Self { snapshot: store.snapshot(), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.authenticated
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.snapshot.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.snapshot.role
    }

    pub fn default_route(&self) -> &'static str {
        role::default_route(self.snapshot.role)
    }
}

/// Successful sign-in: who signed in and where to send them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInOutcome {
    pub user: UserRecord,
    pub role: Option<Role>,
    pub redirect: &'static str,
}

/// Log in and persist the session.
///
/// # Errors
///
/// Returns the gateway error, or [`AuthError::MalformedResponse`] /
/// [`AuthError::StorageUnavailable`] from storing the response. No session is
/// stored on failure.
pub async fn submit_login<B, G>(
    store: &SessionStore<B>,
    gateway: &G,
    request: &LoginRequest,
) -> Result<SignInOutcome, AuthError>
where
    B: SessionBackend,
    G: AuthGateway,
{
    let raw = gateway.login(request).await.inspect_err(|e| log::warn!("login failed: {e}"))?;
    complete_sign_in(store, &raw)
}

/// Register and persist the session the server returns.
///
/// # Errors
///
/// Same as [`submit_login`].
pub async fn submit_register<B, G>(
    store: &SessionStore<B>,
    gateway: &G,
    request: &RegisterRequest,
) -> Result<SignInOutcome, AuthError>
where
    B: SessionBackend,
    G: AuthGateway,
{
    let raw = gateway.register(request).await.inspect_err(|e| log::warn!("registration failed: {e}"))?;
    complete_sign_in(store, &raw)
}

fn complete_sign_in<B: SessionBackend>(
    store: &SessionStore<B>,
    raw: &serde_json::Value,
) -> Result<SignInOutcome, AuthError> {
    let payload = store.store(raw).inspect_err(|e| log::warn!("auth response rejected: {e}"))?;
    let role = payload.user.role.as_deref().and_then(Role::parse);
    Ok(SignInOutcome { redirect: role::default_route(role), role, user: payload.user })
}

/// Read the persisted session at startup, completing it over the network when
/// only a token is cached.
///
/// A rejected profile fetch gets one refresh attempt; if that fails the session
/// is already cleared and the result is signed out.
pub async fn resume<B, G>(store: &SessionStore<B>, gateway: &G) -> AuthState
where
    B: SessionBackend,
    G: AuthGateway,
{
    if store.token().is_none() || store.user().is_some() {
        return AuthState::restore(store);
    }
    match store.ensure_user(gateway).await {
        Ok(_) => {}
        Err(AuthError::InvalidCredentials { status: 401, .. }) => {
            if store.refresh(gateway).await.is_ok() {
                if let Err(err) = store.ensure_user(gateway).await {
                    log::warn!("profile unavailable after refresh: {err}");
                }
            }
        }
        Err(err) => log::warn!("could not load profile ({}): {err}", err.error_code()),
    }
    AuthState::restore(store)
}

/// Drop the session; the next route evaluation sends the user to login.
pub fn logout<B: SessionBackend>(store: &SessionStore<B>) -> AuthState {
    store.clear();
    log::info!("signed out");
    AuthState::default()
}
