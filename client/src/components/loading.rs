//! Full-height spinner shown while an auth request is outstanding.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex min-h-[calc(100vh-65px)] items-center justify-center" aria-busy="true">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
