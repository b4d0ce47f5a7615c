//! User login page (email identifier).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::types::{Identifier, LoginPayload, Session};
use crate::state::auth::AuthState;
use crate::state::session::{default_store, save_session};
use crate::state::ui::UiState;
use crate::util::validate::{validate_email, validate_password};

/// User login form. On success the session is persisted and navigation
/// moves to the protected root.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let submitting = move || auth.get().submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().submitting {
            return;
        }

        email_error.set(validate_email(&email.get_untracked()).err());
        password_error.set(validate_password(&password.get_untracked()).err());
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        let payload = LoginPayload {
            identifier: Identifier::Email(email.get_untracked()),
            password: password.get_untracked(),
        };
        auth.update(|a| a.submitting = true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(&payload).await;
            auth.update(|a| a.submitting = false);
            match result {
                Ok(resp) => {
                    let session = Session { token: resp.token, user: resp.user };
                    save_session(default_store().as_ref(), &session);
                    ui.update(|u| u.show_success(format!("Welcome, {}", session.user.name)));
                    auth.update(|a| a.session = Some(session));
                    navigate("/", NavigateOptions::default());
                }
                Err(message) => {
                    leptos::logging::warn!("login failed: {message}");
                    ui.update(|u| u.show_error(message));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"User Login"</h1>

                <form class="auth-form" on:submit=on_submit>
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

                    <label class="auth-form__label">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError error=password_error/>

                    <button type="submit" class="btn btn--primary" disabled=submitting>
                        {move || if submitting() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
