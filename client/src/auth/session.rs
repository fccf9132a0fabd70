//! Login, registration, logout and token renewal flows.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::single_flight::SingleFlight;
use crate::forms::FieldErrors;
use crate::forms::login::{LoginField, LoginForm};
use crate::forms::register::{RegistrationField, RegistrationForm};
use crate::net::api::AuthApi;
use crate::net::types::{AuthUser, is_truthy};
use crate::state::auth::AuthState;
use crate::util::login_flag::LoginFlag;
use crate::util::route::AppRoute;

/// Result of a renewal attempt (startup reload or token refresh).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    SignedIn(AuthUser),
    /// Renewal failed; logout was issued and the login hint cleared.
    SignedOut,
}

impl SessionOutcome {
    /// Write a startup reload into the auth store and return where to land:
    /// `/` when the session came back, `/login` otherwise.
    pub fn apply_restore(self, state: &mut AuthState) -> AppRoute {
        match self {
            Self::SignedIn(user) => {
                state.set_user(Some(user));
                AppRoute::Home
            }
            Self::SignedOut => {
                state.set_user(None);
                AppRoute::Login
            }
        }
    }

    /// Write a mid-session renewal into the auth store.
    ///
    /// A renewed session stays on the current page and yields the new access
    /// token. A lost one empties the store and yields `/login` as `Err`.
    pub fn apply_refresh(self, state: &mut AuthState) -> Result<String, AppRoute> {
        match self {
            Self::SignedIn(user) => {
                state.set_user(Some(user));
                state.access_token().map(str::to_owned).ok_or(AppRoute::Login)
            }
            Self::SignedOut => {
                state.set_user(None);
                Err(AppRoute::Login)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Local validation failed; nothing was sent.
    Blocked(FieldErrors<LoginField>),
    SignedIn(AuthUser),
    /// The server refused; carries the message for the error toast.
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Local validation failed; nothing was sent.
    Blocked(FieldErrors<RegistrationField>),
    Registered,
    /// The server answered 2xx with a falsy body.
    Unconfirmed,
    /// The server refused; carries the message for the error toast.
    Rejected(String),
}

impl RegistrationOutcome {
    pub fn redirect(&self) -> Option<AppRoute> {
        matches!(self, Self::Registered).then_some(AppRoute::Login)
    }

    /// Every submission that reached the server clears the form.
    pub fn resets_form(&self) -> bool {
        !matches!(self, Self::Blocked(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    SignedOut,
    /// The server answered 2xx with a falsy body; the session is kept.
    Kept,
    Failed(String),
}

impl LogoutOutcome {
    /// Clear the auth store on a confirmed sign out and return `/login`.
    /// A kept or failed logout leaves the session untouched.
    pub fn apply(&self, state: &mut AuthState) -> Option<AppRoute> {
        match self {
            Self::SignedOut => {
                state.set_user(None);
                Some(AppRoute::Login)
            }
            Self::Kept | Self::Failed(_) => None,
        }
    }
}

/// Auth flows bound to one API client and one login hint.
#[derive(Clone)]
pub struct AuthSession<A, F> {
    api: A,
    flag: F,
    refresh_flight: SingleFlight<SessionOutcome>,
}

impl<A, F> AuthSession<A, F> {
    pub fn new(api: A, flag: F) -> Self {
        Self { api, flag, refresh_flight: SingleFlight::new() }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn flag(&self) -> &F {
        &self.flag
    }
}

impl<A: AuthApi, F: LoginFlag> AuthSession<A, F> {
    /// Silent renewal at startup.
    ///
    /// Returns `None` without any request when the login hint is absent.
    pub async fn restore(&self) -> Option<SessionOutcome> {
        if !self.flag.is_set() {
            return None;
        }
        let outcome = match self.api.reload().await {
            Ok(user) => SessionOutcome::SignedIn(user),
            Err(e) => {
                leptos::logging::warn!("session reload failed: {e}");
                force_sign_out(&self.api, &self.flag).await;
                SessionOutcome::SignedOut
            }
        };
        Some(outcome)
    }

    pub async fn login(&self, form: &LoginForm) -> LoginOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => return LoginOutcome::Blocked(errors),
        };
        match self.api.login(&request).await {
            Ok(user) => {
                self.flag.set(true);
                LoginOutcome::SignedIn(user)
            }
            Err(e) => LoginOutcome::Rejected(e.message()),
        }
    }

    pub async fn register(&self, form: &RegistrationForm) -> RegistrationOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => return RegistrationOutcome::Blocked(errors),
        };
        match self.api.register(&request).await {
            Ok(body) if is_truthy(&body) => RegistrationOutcome::Registered,
            Ok(_) => RegistrationOutcome::Unconfirmed,
            Err(e) => RegistrationOutcome::Rejected(e.message()),
        }
    }

    /// User-initiated sign out.
    pub async fn logout(&self) -> LogoutOutcome {
        match self.api.logout().await {
            Ok(body) if is_truthy(&body) => {
                self.flag.set(false);
                LogoutOutcome::SignedOut
            }
            Ok(_) => LogoutOutcome::Kept,
            Err(e) => LogoutOutcome::Failed(e.message()),
        }
    }
}

impl<A, F> AuthSession<A, F>
where
    A: AuthApi + Clone + 'static,
    F: LoginFlag + Clone + 'static,
{
    /// Renew the access token.
    ///
    /// Concurrent callers share one `/auth/refresh-token` request and its
    /// outcome. On failure the server session and the login hint are torn
    /// down exactly once; the caller clears the store with
    /// `SessionOutcome::apply_refresh`.
    pub async fn refresh(&self) -> SessionOutcome {
        let api = self.api.clone();
        let flag = self.flag.clone();
        self.refresh_flight
            .run(move || async move {
                match api.refresh_token().await {
                    Ok(user) => SessionOutcome::SignedIn(user),
                    Err(e) => {
                        leptos::logging::warn!("token refresh failed: {e}");
                        force_sign_out(&api, &flag).await;
                        SessionOutcome::SignedOut
                    }
                }
            })
            .await
    }
}

/// Best-effort server logout after a failed renewal. The local session is
/// cleared whether or not the backend acknowledges it.
async fn force_sign_out<A: AuthApi, F: LoginFlag>(api: &A, flag: &F) {
    if let Err(e) = api.logout().await {
        leptos::logging::warn!("logout after failed renewal: {e}");
    }
    flag.set(false);
}
