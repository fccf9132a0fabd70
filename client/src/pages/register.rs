//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, then posts to `/auth/register` through the session
//! service. Any submission that reaches the server resets the form; success
//! moves on to `/login`, failure raises the `signUp error` toast.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_session;
use crate::components::form_error_message::{FormErrorMessage, field_error};
use crate::components::loading::Loading;
use crate::components::text_input::TextInput;
use crate::forms::FieldErrors;
use crate::forms::register::{RegistrationField, RegistrationForm, name_error};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::route::AppRoute;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = use_session();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::<RegistrationField>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let submitted = form.get_untracked();
        if let Err(field_errors) = submitted.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::auth::RegistrationOutcome;
            use crate::components::toaster::notify_error;
            use crate::state::toast::SIGN_UP_ERROR;

            auth.update(|a| a.set_loading(true));
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = session.get().register(&submitted).await;
                if outcome.resets_form() {
                    form.update(RegistrationForm::reset);
                }
                auth.update(|a| a.set_loading(false));
                if let Some(route) = outcome.redirect() {
                    navigate(route.path(), NavigateOptions::default());
                }
                match outcome {
                    RegistrationOutcome::Blocked(field_errors) => errors.set(field_errors),
                    RegistrationOutcome::Rejected(message) => notify_error(toasts, SIGN_UP_ERROR, message),
                    RegistrationOutcome::Registered | RegistrationOutcome::Unconfirmed => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, session, toasts);
    };

    let name_message = Signal::derive(move || errors.with(|e| name_error(e).map(str::to_owned)));

    view! {
        <Show when=move || !auth.with(|a| a.loading) fallback=|| view! { <Loading/> }>
            <div class="flex min-h-[calc(100vh-65px)] items-center justify-center">
                <div class="card w-96 bg-base-100 drop-shadow-lg">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title text-primary">"Register"</h2>

                        <form on:submit=on_submit.clone() class="flex flex-col gap-3 text-gray-800">
                            <div class="form-control min-w-[350px]">
                                <label class="text-left pb-1">"Username"</label>
                                <TextInput form=form errors=errors field=RegistrationField::Username/>
                                <FormErrorMessage message=field_error(errors, RegistrationField::Username)/>
                            </div>

                            <div class="form-control min-w-[350px]">
                                <div class="flex gap-3">
                                    <div class="flex flex-col items-start justify-center">
                                        <label class="text-left pb-1">"First Name"</label>
                                        <TextInput form=form errors=errors field=RegistrationField::FirstName/>
                                    </div>
                                    <div class="flex flex-col items-start justify-center">
                                        <label class="pb-1">"Last Name"</label>
                                        <TextInput form=form errors=errors field=RegistrationField::LastName/>
                                    </div>
                                </div>
                                <FormErrorMessage message=name_message/>
                            </div>

                            <div class="form-control min-w-[350px]">
                                <label class="text-left pb-1">"Email"</label>
                                <TextInput form=form errors=errors field=RegistrationField::Email/>
                                <FormErrorMessage message=field_error(errors, RegistrationField::Email)/>
                            </div>

                            <div class="form-control min-w-[350px]">
                                <label class="text-left pb-1">"Password"</label>
                                <TextInput
                                    form=form
                                    errors=errors
                                    field=RegistrationField::Password
                                    input_type="password"
                                />
                                <FormErrorMessage message=field_error(errors, RegistrationField::Password)/>
                            </div>

                            <div class="form-control min-w-[350px]">
                                <label class="text-left pb-1">"Confirm Password"</label>
                                <TextInput
                                    form=form
                                    errors=errors
                                    field=RegistrationField::ConfirmPassword
                                    input_type="password"
                                />
                                <FormErrorMessage message=field_error(errors, RegistrationField::ConfirmPassword)/>
                            </div>

                            <button
                                type="submit"
                                class="btn btn-active btn-primary text-white uppercase min-w-[350px]"
                                disabled=move || auth.with(|a| a.loading)
                            >
                                "Register"
                            </button>
                        </form>

                        <p class="text-black">
                            "Already have an account? "
                            <a href=AppRoute::Login.path() class="text-primary">"Log In here"</a>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
