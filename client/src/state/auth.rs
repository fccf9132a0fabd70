//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navbar and pages to render identity-dependent UI, written by
//! the login, logout and renewal flows. The access token lives here and
//! nowhere else; a reload loses it until silent renewal restores it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.access_token.as_str())
    }

    pub fn set_user(&mut self, user: Option<AuthUser>) {
        self.user = user;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
