//! Input bound to one field of a `FormModel` held in a signal.

use leptos::prelude::*;

use super::form_error_message::input_class;
use crate::forms::{FieldErrors, FormModel};

#[component]
pub fn TextInput<M>(
    form: RwSignal<M>,
    errors: RwSignal<FieldErrors<M::Field>>,
    field: M::Field,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    view! {
        <input
            type=input_type
            class=move || input_class(errors.with(|e| e.has(field)))
            prop:value=move || form.with(|f| f.value(field).to_owned())
            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
        />
    }
}
