//! User registration page (email identifier).

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::types::{Identifier, RegisterPayload};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::validate::{validate_confirm, validate_email, validate_name, validate_password};

/// User registration form. Registration never logs the user in: on success
/// the fields reset and a toast points at the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let submitting = move || auth.get().submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().submitting {
            return;
        }

        name_error.set(validate_name(&name.get_untracked()).err());
        email_error.set(validate_email(&email.get_untracked()).err());
        password_error.set(validate_password(&password.get_untracked()).err());
        confirm_error
            .set(validate_confirm(&password.get_untracked(), &confirm.get_untracked()).err());
        if [&name_error, &email_error, &password_error, &confirm_error]
            .iter()
            .any(|e| e.get_untracked().is_some())
        {
            return;
        }

        // Confirm-password is a client-side check only; the backend gets
        // name, identifier, and password. The contact-email field stays
        // empty here because the identifier already is one.
        let payload = RegisterPayload {
            name: name.get_untracked(),
            identifier: Identifier::Email(email.get_untracked()),
            password: password.get_untracked(),
            email: None,
            role: None,
        };
        auth.update(|a| a.submitting = true);

        leptos::task::spawn_local(async move {
            let result = api::register(&payload).await;
            auth.update(|a| a.submitting = false);
            match result {
                Ok(resp) => {
                    ui.update(|u| {
                        u.show_success(format!(
                            "Registered: {}. You can log in now.",
                            resp.user.name
                        ));
                    });
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(message) => {
                    leptos::logging::warn!("registration failed: {message}");
                    ui.update(|u| u.show_error(message));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"User Register"</h1>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError error=name_error/>

                    <label class="auth-form__label">
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError error=email_error/>

                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Password"
                            <input
                                type="password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                type="password"
                                placeholder="Confirm your password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <FieldError error=password_error/>
                    <FieldError error=confirm_error/>

                    <button type="submit" class="btn btn--primary" disabled=submitting>
                        {move || if submitting() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
