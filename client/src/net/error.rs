//! Structured failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every verb on the API client returns `Result<T, ApiError>`. Views never
//! inspect raw responses; they show `ApiError::message()` in a toast.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ServerMessage;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only wired up in the hydrated browser build.
    #[error("requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a server error from a failed response, preferring the backend's
    /// own `{ "message": ... }` text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServerMessage>(body)
            .map(|m| m.message)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| request_failed_message(status));
        Self::Server { status, message }
    }

    /// Text shown to the user in an error toast.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
