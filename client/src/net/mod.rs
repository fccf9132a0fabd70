//! Networking modules for the auth REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies failures, and `types` defines
//! the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
