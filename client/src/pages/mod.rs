//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (submit handlers, navigation)
//! and delegates validation to `forms` and requests to `auth`.

pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
