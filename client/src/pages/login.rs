//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts credentials to `/auth/login`. Success stores the returned session,
//! sets the persisted login hint and moves to `/`; failure raises the
//! `logIn error` toast and clears the password.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_session;
use crate::components::form_error_message::{FormErrorMessage, field_error};
use crate::components::text_input::TextInput;
use crate::forms::FieldErrors;
use crate::forms::login::{LoginField, LoginForm};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::route::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = use_session();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::<LoginField>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
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
            use crate::auth::LoginOutcome;
            use crate::components::toaster::notify_error;
            use crate::state::toast::LOG_IN_ERROR;

            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = session.get().login(&submitted).await;
                busy.set(false);
                match outcome {
                    LoginOutcome::SignedIn(user) => {
                        auth.update(|a| a.set_user(Some(user)));
                        form.update(LoginForm::reset);
                        navigate(AppRoute::Home.path(), NavigateOptions::default());
                    }
                    LoginOutcome::Rejected(message) => {
                        form.update(LoginForm::clear_password);
                        notify_error(toasts, LOG_IN_ERROR, message);
                    }
                    LoginOutcome::Blocked(field_errors) => errors.set(field_errors),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, session, toasts, auth);
    };

    view! {
        <div class="flex min-h-[calc(100vh-65px)] items-center justify-center">
            <div class="card w-96 bg-base-100 drop-shadow-lg">
                <div class="card-body items-center text-center">
                    <h2 class="card-title text-primary">"Log In"</h2>

                    <form on:submit=on_submit class="flex flex-col gap-3 text-gray-800">
                        <div class="form-control min-w-[350px]">
                            <label class="text-left pb-1">"Email"</label>
                            <TextInput form=form errors=errors field=LoginField::Email/>
                            <FormErrorMessage message=field_error(errors, LoginField::Email)/>
                        </div>

                        <div class="form-control min-w-[350px]">
                            <label class="text-left pb-1">"Password"</label>
                            <TextInput form=form errors=errors field=LoginField::Password input_type="password"/>
                            <FormErrorMessage message=field_error(errors, LoginField::Password)/>
                        </div>

                        <button
                            type="submit"
                            class="btn btn-active btn-primary text-white uppercase min-w-[350px]"
                            disabled=move || busy.get()
                        >
                            "Log In"
                        </button>
                    </form>

                    <p class="text-black">
                        "New to GlassesOn? "
                        <a href=AppRoute::Register.path() class="text-primary">"Register here"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
