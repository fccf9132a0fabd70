//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! address is baked in from `GLASSESON_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin (plus optional path prefix) without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Read `GLASSESON_API_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("GLASSESON_API_URL"))
    }

    fn from_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}
