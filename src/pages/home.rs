//! Protected landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Home page behind the route guard. Greets the user from the session
/// rehydrated into `AuthState`; the contact line shows whichever
/// identifier the account has.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Marketfront"</h1>
            <p class="home-page__greeting">{move || auth.get().greeting()}</p>
            {move || {
                auth.get()
                    .contact()
                    .map(|c| view! { <p class="home-page__contact">{c}</p> })
            }}
        </div>
    }
}
