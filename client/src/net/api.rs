//! REST auth gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<serde_json::Value, AuthError>`. Transport
//! failures map to `AuthError::Network`; non-2xx responses map to
//! `AuthError::InvalidCredentials` carrying the server's `message`, if any.
//! Shape validation is left to `net::normalize`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{LoginRequest, RegisterRequest};
use crate::config::ClientConfig;
use crate::error::AuthError;

/// The external auth endpoints.
///
/// Futures are not required to be `Send`; the browser runtime is
/// single-threaded.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<Value, AuthError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<Value, AuthError>;

    /// `POST /auth/refresh` authorized by the refresh token.
    async fn refresh(&self, refresh_token: &str) -> Result<Value, AuthError>;

    /// `GET /auth/me` authorized by the access token.
    async fn current_user(&self, access_token: &str) -> Result<Value, AuthError>;
}

/// Gateway backed by the browser `fetch` API.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
    config: ClientConfig,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &Value) -> AuthError {
    AuthError::InvalidCredentials { status, message: super::normalize::error_message(body) }
}

#[cfg(feature = "hydrate")]
async fn send_json(request: gloo_net::http::Request) -> Result<Value, AuthError> {
    let resp = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    // Error bodies are not always JSON; treat an unreadable body as empty.
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    if !ok {
        log::warn!("auth request rejected: status {status}");
        return Err(rejection(status, &body));
    }
    Ok(body)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Network("not available on server".to_owned())
}

impl AuthGateway for HttpGateway {
    async fn login(&self, request: &LoginRequest) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.config.auth_endpoint("login"))
                .json(request)
                .map_err(|e| AuthError::Network(e.to_string()))?;
            send_json(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.config.auth_endpoint("register"))
                .json(request)
                .map_err(|e| AuthError::Network(e.to_string()))?;
            send_json(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.config.auth_endpoint("refresh"))
                .header("Authorization", &bearer(refresh_token))
                .build()
                .map_err(|e| AuthError::Network(e.to_string()))?;
            send_json(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(unavailable())
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::get(&self.config.auth_endpoint("me"))
                .header("Authorization", &bearer(access_token))
                .header("Content-Type", "application/json")
                .build()
                .map_err(|e| AuthError::Network(e.to_string()))?;
            send_json(req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(unavailable())
        }
    }
}
