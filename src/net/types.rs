//! Wire types shared between the auth API client and the UI.
//!
//! The backend owns the user record shape; the client treats `role` as an
//! opaque string and only reads the optional contact fields for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role sent with a registration request. On responses the role comes back
/// as a plain string inside [`User`] and is not re-validated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Vendor,
    Admin,
}

/// Account identifier — user forms collect an email, vendor forms a phone
/// number. Serializes flattened as a single `email` or `phone` field so a
/// given backend only ever sees the scheme it supports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identifier {
    #[serde(rename = "email")]
    Email(String),
    #[serde(rename = "phone")]
    Phone(String),
}

/// User record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Token plus user record, persisted locally after a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of `POST /auth/register`.
///
/// `email` is a contact address sent alongside a phone identifier (vendor
/// accounts); leave it `None` when the identifier is already an email.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    #[serde(flatten)]
    pub identifier: Identifier,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    #[serde(flatten)]
    pub identifier: Identifier,
    pub password: String,
}

/// Success body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}
