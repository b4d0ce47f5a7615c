//! Persisted session state.
//!
//! DESIGN
//! ======
//! Storage is an explicit trait so the route guard and form handlers can be
//! exercised against an in-memory map in tests. The browser impl is plain
//! localStorage under the keys `token` and `user`; a non-empty `token`
//! value is the sole signal of logged-in state. The client never verifies
//! token format, signature, or expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::{Session, User};

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the user record as JSON.
pub const USER_KEY: &str = "user";

/// Key-value store backing the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used in tests and on the server, where no persisted
/// session can exist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// localStorage-backed store. Storage failures degrade to "no session"
/// rather than panicking, so private-mode browsers still render.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The store the running app uses: localStorage in the browser, an empty
/// in-memory map during SSR (the server never sees a session; the client
/// re-evaluates after hydration).
pub fn default_store() -> Box<dyn SessionStore> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(BrowserStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(MemoryStore::default())
    }
}

/// Persist a session: token as-is, user as JSON.
pub fn save_session(store: &dyn SessionStore, session: &Session) {
    store.set(TOKEN_KEY, &session.token);
    if let Ok(json) = serde_json::to_string(&session.user) {
        store.set(USER_KEY, &json);
    }
}

/// Read the stored token, if any.
pub fn load_token(store: &dyn SessionStore) -> Option<String> {
    store.get(TOKEN_KEY)
}

/// Read and decode the stored user record. A missing or undecodable value
/// yields `None`; the token alone still authenticates.
pub fn load_user(store: &dyn SessionStore) -> Option<User> {
    store
        .get(USER_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
}

/// Read the full stored session, requiring both keys.
pub fn load_session(store: &dyn SessionStore) -> Option<Session> {
    let token = load_token(store)?;
    let user = load_user(store)?;
    Some(Session { token, user })
}

/// Drop both session keys.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
