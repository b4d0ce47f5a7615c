//! Route guard for token-gated views.
//!
//! The decision is a bare presence check on the stored token: any non-empty
//! value authorizes, regardless of format or validity. The server is the
//! only place a token is actually verified.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::state::session::{default_store, load_token};

/// Path unauthenticated navigation is redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating the guard against the stored token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Authorized,
    RedirectToLogin,
}

impl GuardOutcome {
    /// Decide from the stored token value. Absent or empty redirects;
    /// anything else authorizes.
    pub fn for_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Authorized,
            _ => Self::RedirectToLogin,
        }
    }
}

/// Layout route wrapping protected views: renders the nested outlet when a
/// token is stored, otherwise redirects to the login page. Runs
/// synchronously on every navigation into the protected subtree.
#[component]
pub fn ProtectedRoutes() -> impl IntoView {
    let token = load_token(default_store().as_ref());
    match GuardOutcome::for_token(token.as_deref()) {
        GuardOutcome::Authorized => view! { <Outlet/> }.into_any(),
        GuardOutcome::RedirectToLogin => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}
