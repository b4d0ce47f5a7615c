//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    home::HomePage, login::LoginPage, register::RegisterPage, vendor_login::VendorLoginPage,
    vendor_register::VendorRegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::session::{default_store, load_session};
use crate::state::ui::UiState;
use crate::util::guard::ProtectedRoutes;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. The
/// login/register pages are public; the root path sits behind the token
/// guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Rehydrate any persisted session so pages can greet the user without
    // a round trip.
    let auth = RwSignal::new(AuthState {
        session: load_session(default_store().as_ref()),
        submitting: false,
    });
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/marketfront.css"/>
        <Title text="Marketfront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("vendor"), StaticSegment("login")) view=VendorLoginPage/>
                <Route path=(StaticSegment("vendor"), StaticSegment("register")) view=VendorRegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoutes>
                    <Route path=StaticSegment("") view=HomePage/>
                </ParentRoute>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
