//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! WASM bundles have no process environment at runtime, so values come from
//! `option_env!` when the bundle is compiled and fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_STORAGE_KEY: &str = "token";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every API path (no trailing slash).
    pub api_base_url: String,
    /// Durable storage key holding the session token.
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `GATEKEEPER_API_BASE_URL`: default `/api`
    /// - `GATEKEEPER_STORAGE_KEY`: default `token`
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GATEKEEPER_API_BASE_URL"), option_env!("GATEKEEPER_STORAGE_KEY"))
    }

    fn from_values(api_base_url: Option<&str>, storage_key: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let storage_key = storage_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY)
            .to_owned();
        Self { api_base_url, storage_key }
    }

    /// Join an API path such as `/auth/login` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
