//! Transient notifications.
//!
//! Every toast carries a stable id. Pushing an id that is already on screen
//! replaces that toast in place, so repeated identical failures never stack.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DURATION_MS: u32 = 4_000;

pub const SIGN_UP_ERROR: &str = "signUp error";
pub const LOG_IN_ERROR: &str = "logIn error";
pub const LOG_OUT_ERROR: &str = "logOut error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    /// Bumped on every replacement so a pending dismiss timer for an older
    /// copy does not remove the fresh one.
    pub revision: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Oldest first.
    pub toasts: Vec<Toast>,
    next_revision: u64,
}

impl ToastState {
    /// Show an error toast, replacing any toast with the same id. Returns the
    /// revision assigned to it.
    pub fn error(&mut self, id: &str, message: impl Into<String>) -> u64 {
        self.next_revision += 1;
        let toast = Toast {
            id: id.to_owned(),
            message: message.into(),
            revision: self.next_revision,
        };
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }
        self.next_revision
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Dismiss only if the toast has not been replaced since `revision`.
    pub fn expire(&mut self, id: &str, revision: u64) {
        self.toasts.retain(|t| t.id != id || t.revision != revision);
    }

    /// Newest first, matching the top-center reverse-ordered stack.
    pub fn newest_first(&self) -> Vec<Toast> {
        self.toasts.iter().rev().cloned().collect()
    }
}
