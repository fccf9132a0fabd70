//! Wire DTOs for the auth REST endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly, which mixes snake_case
//! (`first_name`) with camelCase (`accessToken`, `confirmPassword`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/auth/login`, `/auth/reload` and
/// `/auth/refresh-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Public handle chosen at registration.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Server-assigned role (e.g. `"user"`, `"admin"`).
    pub role: String,
    /// Short-lived bearer credential. Held in memory only.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}

/// JavaScript-style truthiness of a response body.
///
/// Register and logout only signal success by returning a non-empty body.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
