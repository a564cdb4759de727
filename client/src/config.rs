//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so the API location is baked
//! in from `FARMTECH_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root, without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `FARMTECH_API_URL`: REST API root (default `http://localhost:8080/api`)
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("FARMTECH_API_URL"))
    }

    fn with_base_url(raw: Option<&str>) -> Self {
        let base = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
        Self { api_base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an auth endpoint such as `"login"`.
    pub fn auth_endpoint(&self, name: &str) -> String {
        format!("{}/auth/{name}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
