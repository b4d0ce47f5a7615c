#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and whether a form
/// submit is in flight (used to disable submit buttons).
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub submitting: bool,
}

impl AuthState {
    /// Display name of the logged-in user, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.name.as_str())
    }

    /// Greeting line for the protected home page.
    pub fn greeting(&self) -> String {
        self.user_name()
            .map_or_else(|| "Welcome back".to_owned(), |name| format!("Welcome back, {name}"))
    }

    /// Whichever contact field the logged-in account has, email first.
    pub fn contact(&self) -> Option<String> {
        let user = &self.session.as_ref()?.user;
        user.email.clone().or_else(|| user.phone.clone())
    }
}
