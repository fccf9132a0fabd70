//! Navigation targets used by the auth flows.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}
