//! Shared doubles for unit tests.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use serde_json::{Value, json};

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthUser, LoginRequest, RegisterRequest};

pub(crate) fn user(username: &str, token: &str) -> AuthUser {
    AuthUser {
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        role: "user".to_owned(),
        access_token: token.to_owned(),
    }
}

pub(crate) fn server_error(status: u16, message: &str) -> ApiError {
    ApiError::Server { status, message: message.to_owned() }
}

/// Returns `Pending` once (waking itself) before completing, so joined
/// futures interleave.
pub(crate) struct YieldOnce(bool);

impl YieldOnce {
    pub(crate) fn new() -> Self {
        Self(false)
    }
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Canned replies for `MockApi`. Defaults are all successful.
#[derive(Clone)]
pub(crate) struct Replies {
    pub register: Result<Value, ApiError>,
    pub login: Result<AuthUser, ApiError>,
    pub logout: Result<Value, ApiError>,
    pub refresh_token: Result<AuthUser, ApiError>,
    pub reload: Result<AuthUser, ApiError>,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            register: Ok(json!({ "message": "registered" })),
            login: Ok(user("ada", "login-token")),
            logout: Ok(json!({ "message": "logged out" })),
            refresh_token: Ok(user("ada", "fresh-token")),
            reload: Ok(user("ada", "reload-token")),
        }
    }
}

/// Records every call by endpoint name and answers from `Replies`.
#[derive(Clone, Default)]
pub(crate) struct MockApi {
    replies: Rc<Replies>,
    calls: Rc<RefCell<Vec<&'static str>>>,
    sent_register: Rc<RefCell<Option<RegisterRequest>>>,
    sent_login: Rc<RefCell<Option<LoginRequest>>>,
}

impl MockApi {
    pub(crate) fn new(replies: Replies) -> Self {
        Self { replies: Rc::new(replies), ..Self::default() }
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }

    pub(crate) fn sent_register(&self) -> Option<RegisterRequest> {
        self.sent_register.borrow().clone()
    }

    pub(crate) fn sent_login(&self) -> Option<LoginRequest> {
        self.sent_login.borrow().clone()
    }

    fn record(&self, endpoint: &'static str) {
        self.calls.borrow_mut().push(endpoint);
    }
}

impl AuthApi for MockApi {
    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.record("register");
        *self.sent_register.borrow_mut() = Some(request.clone());
        self.replies.register.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        self.record("login");
        *self.sent_login.borrow_mut() = Some(request.clone());
        self.replies.login.clone()
    }

    async fn logout(&self) -> Result<Value, ApiError> {
        self.record("logout");
        self.replies.logout.clone()
    }

    async fn refresh_token(&self) -> Result<AuthUser, ApiError> {
        self.record("refresh_token");
        YieldOnce::new().await;
        self.replies.refresh_token.clone()
    }

    async fn reload(&self) -> Result<AuthUser, ApiError> {
        self.record("reload");
        self.replies.reload.clone()
    }
}
