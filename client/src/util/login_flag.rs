//! The persisted "was logged in" hint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage["isLoggedIn"]` survives reloads while the in-memory session
//! does not. It only decides whether startup should attempt a silent reload;
//! it is never treated as a credential.

#[cfg(test)]
#[path = "login_flag_test.rs"]
mod login_flag_test;

pub const STORAGE_KEY: &str = "isLoggedIn";

/// Read/write access to the persisted login hint.
pub trait LoginFlag {
    fn is_set(&self) -> bool;
    fn set(&self, logged_in: bool);
}

/// Stored value for a flag state.
pub fn encode_flag(logged_in: bool) -> &'static str {
    if logged_in { "true" } else { "false" }
}

/// Anything other than the exact string `"true"` reads as logged out.
pub fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// `localStorage`-backed flag. Reads `false` and ignores writes outside the
/// browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLoginFlag;

impl LoginFlag for BrowserLoginFlag {
    fn is_set(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
            decode_flag(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set(&self, logged_in: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, encode_flag(logged_in));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = logged_in;
        }
    }
}

/// In-memory flag for tests. Clones share the same cell.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryLoginFlag(std::rc::Rc<std::cell::Cell<bool>>);

#[cfg(test)]
impl MemoryLoginFlag {
    pub(crate) fn new(logged_in: bool) -> Self {
        Self(std::rc::Rc::new(std::cell::Cell::new(logged_in)))
    }
}

#[cfg(test)]
impl LoginFlag for MemoryLoginFlag {
    fn is_set(&self) -> bool {
        self.0.get()
    }

    fn set(&self, logged_in: bool) {
        self.0.set(logged_in);
    }
}
