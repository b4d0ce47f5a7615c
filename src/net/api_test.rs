use super::*;

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base("http://localhost:4000/api/"), "http://localhost:4000/api");
    assert_eq!(normalize_base("http://localhost:4000/api///"), "http://localhost:4000/api");
    assert_eq!(normalize_base("http://localhost:4000/api"), "http://localhost:4000/api");
}

#[test]
fn api_base_defaults_to_local_backend() {
    assert_eq!(api_base(), "http://localhost:4000/api");
}

#[test]
fn build_url_inserts_exactly_one_separator() {
    assert_eq!(
        build_url("http://localhost:4000/api", "/auth/login"),
        "http://localhost:4000/api/auth/login"
    );
    assert_eq!(
        build_url("http://localhost:4000/api", "auth/login"),
        "http://localhost:4000/api/auth/login"
    );
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_error_then_message() {
    let body = serde_json::json!({"error": "e1", "message": "m1"});
    assert_eq!(error_message(400, &body), "e1");

    let body = serde_json::json!({"message": "m1"});
    assert_eq!(error_message(400, &body), "m1");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, &serde_json::json!({})), "HTTP 500");
    assert_eq!(error_message(404, &serde_json::json!({"detail": "nope"})), "HTTP 404");
}

#[test]
fn error_message_skips_empty_and_non_string_fields() {
    // Mirrors the truthiness of `data.error || data.message` in the
    // backend's own JS clients: empty strings fall through.
    let body = serde_json::json!({"error": "", "message": "m1"});
    assert_eq!(error_message(400, &body), "m1");

    let body = serde_json::json!({"error": 42, "message": ""});
    assert_eq!(error_message(422, &body), "HTTP 422");
}

#[test]
fn error_message_surfaces_invalid_credentials_verbatim() {
    let body = serde_json::json!({"message": "Invalid credentials"});
    assert_eq!(error_message(401, &body), "Invalid credentials");
}
