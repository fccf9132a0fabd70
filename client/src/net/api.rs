//! REST client for the GlassesOn auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! cookies so the backend's refresh-token cookie travels with each request.
//! Server-side (SSR) and unit tests: every verb returns
//! `ApiError::Unavailable` without touching the network.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call, no retry, no timeout. Failures come back as
//! `ApiError` so views can surface the server's message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AuthUser, LoginRequest, RegisterRequest};
use crate::config::ClientConfig;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";
pub const RELOAD_PATH: &str = "/auth/reload";

/// HTTP client bound to the backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Absolute URL for an endpoint path such as `/auth/login`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// `GET` a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .build();
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on serialization or transport failure, non-2xx
    /// status, or a reply that does not decode into `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body);
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE` a resource and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a reply
    /// that does not decode into `T`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::delete(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .build();
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("request to {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::from_response(status, &body));
    }
    decode_body(&body)
}

/// Decode a successful response body. An empty body reads as JSON `null`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Endpoint-level auth operations.
///
/// Implemented by `ApiClient`; session orchestration is generic over this
/// trait so it can run against in-memory doubles in tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/register`. Success is signalled by a truthy body.
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError>;

    /// `DELETE /auth/logout`. Success is signalled by a truthy body.
    async fn logout(&self) -> Result<serde_json::Value, ApiError>;

    /// `GET /auth/refresh-token`.
    async fn refresh_token(&self) -> Result<AuthUser, ApiError>;

    /// `GET /auth/reload`, used once at startup.
    async fn reload(&self) -> Result<AuthUser, ApiError>;
}

impl AuthApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.post(REGISTER_PATH, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        self.post(LOGIN_PATH, request).await
    }

    async fn logout(&self) -> Result<serde_json::Value, ApiError> {
        self.delete(LOGOUT_PATH).await
    }

    async fn refresh_token(&self) -> Result<AuthUser, ApiError> {
        self.get(REFRESH_TOKEN_PATH).await
    }

    async fn reload(&self) -> Result<AuthUser, ApiError> {
        self.get(RELOAD_PATH).await
    }
}
