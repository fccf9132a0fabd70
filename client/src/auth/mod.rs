//! Session orchestration over the auth REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the navbar never call the API client directly for auth. They go
//! through `AuthSession`, which owns the persisted login hint, applies the
//! lifecycle `Unauthenticated -> Authenticated -> Unauthenticated`, and
//! returns plain outcome values the view applies to its signals.
//!
//! DESIGN
//! ======
//! `AuthSession` is generic over `AuthApi` and `LoginFlag` so every flow runs
//! in unit tests against in-memory doubles. In the app it is stored once in
//! context behind a `SessionHandle` and fetched with `use_session()`.
//! `use_refresh()` binds token renewal to the auth store and the router for
//! callers that need a fresh access token mid-session.

pub mod session;
pub mod single_flight;

pub use session::{AuthSession, LoginOutcome, LogoutOutcome, RegistrationOutcome, SessionOutcome};

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::util::login_flag::BrowserLoginFlag;

/// The session service used by the running app.
pub type AppSession = AuthSession<ApiClient, BrowserLoginFlag>;

/// Copyable context handle to the app's session service.
///
/// The service itself is not `Send`, so it lives in local storage; resolve it
/// with `get()` only in browser-side code.
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<AppSession, LocalStorage>);

impl SessionHandle {
    pub fn get(&self) -> AppSession {
        self.0.get_value()
    }

    /// Renew the access token and write the result into `auth`.
    ///
    /// Returns the new token and leaves the current page alone. When renewal
    /// fails the store is emptied and `navigate` is sent to `/login`.
    pub async fn refresh<N>(self, auth: RwSignal<AuthState>, navigate: N) -> Option<String>
    where
        N: Fn(&str, NavigateOptions),
    {
        let outcome = self.get().refresh().await;
        match auth.try_update(move |state| outcome.apply_refresh(state))? {
            Ok(token) => Some(token),
            Err(route) => {
                navigate(route.path(), NavigateOptions::default());
                None
            }
        }
    }
}

/// Store the session service in context for the component tree below.
pub fn provide_session(session: AppSession) {
    provide_context(SessionHandle(StoredValue::new_local(session)));
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Token renewal bound to the app's auth store and router.
///
/// Call inside `Router`. Each invocation of the returned closure joins or
/// starts a single-flight renewal and resolves to the new access token.
pub fn use_refresh() -> impl Fn() -> LocalBoxFuture<'static, Option<String>> + Clone {
    let session = use_session();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    move || session.refresh(auth, navigate.clone()).boxed_local()
}
