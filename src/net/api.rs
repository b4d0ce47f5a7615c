//! Auth API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since authentication is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure — transport error, non-2xx status, malformed body —
//! collapses into a single human-readable message string. The message for
//! a non-2xx response comes from the body's `error` field, else its
//! `message` field, else `HTTP <status>`. Nothing is retried and no
//! timeout is applied; each call is one round trip.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginPayload, LoginResponse, RegisterPayload, RegisterResponse};

/// Base used when `MARKETFRONT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";

/// Resolve the API base URL: build-time env override or the local default,
/// with trailing slashes stripped.
pub fn api_base() -> String {
    normalize_base(option_env!("MARKETFRONT_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Strip trailing slashes so path joining never produces `//`.
pub fn normalize_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Join a base and a path, inserting exactly one `/` between them.
pub fn build_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Extract the failure message from a non-2xx response body.
///
/// Prefers a non-empty `error` field, then a non-empty `message` field,
/// falling back to `HTTP <status>`.
pub fn error_message(status: u16, body: &serde_json::Value) -> String {
    field_text(body, "error")
        .or_else(|| field_text(body, "message"))
        .map_or_else(|| format!("HTTP {status}"), str::to_owned)
}

fn field_text<'a>(body: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend's failure message, or a transport/decode error
/// rendered as a string.
pub async fn register(payload: &RegisterPayload) -> Result<RegisterResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/register", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Log in via `POST /auth/login`. On success the backend's token and user
/// are returned exactly as sent; nothing is normalized client-side.
///
/// # Errors
///
/// Returns the backend's failure message, or a transport/decode error
/// rendered as a string.
pub async fn login(payload: &LoginPayload) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/login", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// POST a JSON body and decode a JSON response, mapping non-2xx statuses
/// through [`error_message`].
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, String> {
    let url = build_url(&api_base(), path);
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    // Bodies that are not valid JSON are treated as empty, so the status
    // fallback still applies.
    let data: serde_json::Value = resp
        .json()
        .await
        .unwrap_or_else(|_| serde_json::json!({}));

    if !resp.ok() {
        return Err(error_message(resp.status(), &data));
    }
    serde_json::from_value(data).map_err(|e| e.to_string())
}
