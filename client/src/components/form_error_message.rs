//! Inline validation message under a form control.

#[cfg(test)]
#[path = "form_error_message_test.rs"]
mod form_error_message_test;

use leptos::prelude::*;

use crate::forms::FieldErrors;

#[component]
pub fn FormErrorMessage(message: Signal<Option<String>>) -> impl IntoView {
    view! { <p class="text-error text-left">{move || message.get().unwrap_or_default()}</p> }
}

/// Input classes, adding `input-error` when the field failed validation.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input input-bordered w-full bg-secondary input-error"
    } else {
        "input input-bordered w-full bg-secondary"
    }
}

/// Reactive message for one field of an error map.
pub fn field_error<F>(errors: RwSignal<FieldErrors<F>>, field: F) -> Signal<Option<String>>
where
    F: Ord + Copy + Send + Sync + 'static,
{
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}
