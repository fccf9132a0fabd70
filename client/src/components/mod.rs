//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navbar, toasts) and form pieces while
//! reading/writing shared state from Leptos context providers.

pub mod form_error_message;
pub mod loading;
pub mod navbar;
pub mod text_input;
pub mod toaster;
