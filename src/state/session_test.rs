use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        name: "Jane".to_owned(),
        role: "customer".to_owned(),
        email: Some("user@example.com".to_owned()),
        phone: None,
    }
}

// =============================================================
// MemoryStore basics
// =============================================================

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);

    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));

    store.remove("k");
    assert_eq!(store.get("k"), None);
}

// =============================================================
// Session persistence
// =============================================================

#[test]
fn save_session_writes_token_and_user_keys() {
    let store = MemoryStore::default();
    let session = Session { token: "abc123".to_owned(), user: user() };

    save_session(&store, &session);

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
    let stored: User =
        serde_json::from_str(&store.get(USER_KEY).expect("user key")).expect("user json");
    assert_eq!(stored, user());
}

#[test]
fn load_session_requires_both_keys() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "abc123");
    assert!(load_session(&store).is_none());

    store.set(USER_KEY, &serde_json::to_string(&user()).expect("json"));
    let session = load_session(&store).expect("session");
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user, user());
}

#[test]
fn load_user_ignores_undecodable_records() {
    let store = MemoryStore::default();
    store.set(USER_KEY, "not json");
    assert!(load_user(&store).is_none());
}

#[test]
fn clear_session_removes_both_keys() {
    let store = MemoryStore::default();
    save_session(&store, &Session { token: "t".to_owned(), user: user() });

    clear_session(&store);

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}
