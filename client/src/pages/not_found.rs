//! Catch-all route.

use leptos::prelude::*;

use crate::util::route::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[calc(100vh-65px)] flex-col items-center justify-center gap-3">
            <h1 class="text-6xl font-bold text-primary">"404"</h1>
            <p class="text-black">"This page could not be found."</p>
            <a href=AppRoute::Home.path() class="btn btn-primary text-white">"Back home"</a>
        </div>
    }
}
