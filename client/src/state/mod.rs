//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is a plain struct wrapped in an `RwSignal` and provided through
//! Leptos context by `App`, so components read and write it explicitly rather
//! than through globals.

pub mod auth;
pub mod toast;
