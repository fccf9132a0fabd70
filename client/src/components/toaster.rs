//! Top-center toast stack.
//!
//! `notify_error` is the single entry point views use to surface request
//! failures; it also schedules the auto-dismiss in the browser.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Show an error toast under `id`, replacing any toast with the same id.
pub fn notify_error(toasts: RwSignal<ToastState>, id: &'static str, message: String) {
    let mut revision = 0;
    toasts.update(|t| revision = t.error(id, message));
    schedule_expiry(toasts, id, revision);
}

fn schedule_expiry(toasts: RwSignal<ToastState>, id: &'static str, revision: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toasts.update(|t| t.expire(id, revision));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id, revision);
}

const TOAST_CLASS: &str = "alert alert-error shadow-md cursor-pointer";

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast toast-top toast-center z-50" role="status" aria-live="polite">
            <For
                each=move || toasts.get().newest_first()
                key=|toast: &Toast| (toast.id.clone(), toast.revision)
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    view! {
                        <div
                            class=TOAST_CLASS
                            on:click=move |_| toasts.update(|t| t.dismiss(&id))
                        >
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
