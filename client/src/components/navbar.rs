//! Top navigation bar with the brand link and the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. The avatar and "Sign Out" action appear only for
//! an authenticated session that carries an email.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_session;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::route::AppRoute;

/// Whether the account dropdown should be shown.
pub fn shows_account_menu(state: &AuthState) -> bool {
    state.user.as_ref().is_some_and(|u| !u.email.is_empty())
}

/// First character of the username, as typed.
pub fn avatar_initial(state: &AuthState) -> Option<String> {
    if !shows_account_menu(state) {
        return None;
    }
    state
        .user
        .as_ref()
        .and_then(|u| u.username.chars().next())
        .map(String::from)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = use_session();
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::auth::LogoutOutcome;
            use crate::components::toaster::notify_error;
            use crate::state::toast::LOG_OUT_ERROR;

            signing_out.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = session.get().logout().await;
                signing_out.set(false);
                if let Some(route) = auth.try_update(|a| outcome.apply(a)).flatten() {
                    navigate(route.path(), NavigateOptions::default());
                } else if let LogoutOutcome::Failed(message) = outcome {
                    notify_error(toasts, LOG_OUT_ERROR, message);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, session, toasts);
    };

    view! {
        <div class="navbar lg:px-16 px-12 h-[65px]">
            <div class="flex-1">
                <a href=AppRoute::Home.path() class="text-4xl font-bold text-primary">
                    <p class="font-['Comforter_Brush']">
                        "Glasses" <span class="font-normal">"On"</span>
                    </p>
                </a>
            </div>
            <div class="flex items-center gap-2 text-black">
                <Show when=move || auth.with(shows_account_menu)>
                    <div class="dropdown dropdown-end">
                        <label tabindex="0" class="btn btn-ghost btn-circle avatar">
                            <div class="w-10 h-10 rounded-full shadow-md bg-primary">
                                <span class="text-2xl pt-1 flex justify-center items-center text-white">
                                    {move || auth.with(avatar_initial).unwrap_or_default()}
                                </span>
                            </div>
                        </label>
                        <ul
                            tabindex="0"
                            class="mt-3 p-2 shadow menu menu-compact dropdown-content bg-base-100 rounded-box w-52"
                        >
                            <li>
                                <button
                                    class="btn btn-primary text-white"
                                    disabled=move || signing_out.get()
                                    on:click=on_sign_out.clone()
                                >
                                    "Sign Out"
                                </button>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
