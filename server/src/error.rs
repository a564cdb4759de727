//! Startup and serving errors for the SSR host.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

impl ServerError {
    /// Stable code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPort(_) => "E_INVALID_PORT",
            Self::LeptosConfig(_) => "E_LEPTOS_CONFIG",
            Self::Bind { .. } => "E_BIND",
            Self::Serve(_) => "E_SERVE",
        }
    }
}
