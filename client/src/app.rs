//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::{AppSession, provide_session, use_session};
use crate::components::{navbar::Navbar, toaster::Toaster};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::login_flag::BrowserLoginFlag;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="mytheme">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store, toast store and session service, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    let api = ApiClient::from_config(&ClientConfig::from_build_env());
    provide_session(AppSession::new(api, BrowserLoginFlag));

    view! {
        <Stylesheet id="leptos" href="/pkg/glasseson.css"/>
        <Title text="GlassesOn"/>

        <Router>
            <SessionBootstrap/>
            <Toaster/>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Silent renewal, once per mount.
///
/// If the persisted login hint is set, reload the session from the refresh
/// cookie and land on `/`; if that fails the session service has already
/// logged out and cleared the hint, so land on `/login`.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(outcome) = session.get().restore().await else {
            return;
        };
        if let Some(route) = auth.try_update(move |a| outcome.apply_restore(a)) {
            navigate(route.path(), NavigateOptions::default());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, session, navigate);
}
