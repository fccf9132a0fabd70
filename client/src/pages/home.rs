//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::route::AppRoute;

/// Greeting line for the signed-in user.
pub fn greeting(state: &AuthState) -> Option<String> {
    state.user.as_ref().map(|u| format!("Welcome back, {}!", u.username))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="flex min-h-[calc(100vh-65px)] flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-5xl font-bold text-primary">"Find your perfect pair"</h1>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=|| {
                    view! {
                        <div class="flex gap-3">
                            <a href=AppRoute::Login.path() class="btn btn-primary text-white">"Log In"</a>
                            <a href=AppRoute::Register.path() class="btn btn-outline btn-primary">"Register"</a>
                        </div>
                    }
                }
            >
                <p class="text-xl text-black">{move || auth.with(greeting).unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
