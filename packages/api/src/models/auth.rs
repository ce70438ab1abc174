//! # Authentication payloads
//!
//! Wire shapes of the REST auth endpoints:
//!
//! | Type | Endpoint | Encoding |
//! |------|----------|----------|
//! | [`Credentials`] | `POST /auth/login` request | form (`username`, `password`) |
//! | [`TokenResponse`] | `POST /auth/login` response | JSON |
//! | [`NewAccount`] | `POST /auth/register` request | JSON (`username`, `email`, `hashed_password`) |
//!
//! None of these are persisted; they live only for the duration of a form
//! submission.

use serde::{Deserialize, Serialize};

/// Login form body. `username` may hold a username or an email address;
/// the server decides how to match it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: identifier.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Registration body. The server hashes `hashed_password` before storing it;
/// the field name is the backend's.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    #[serde(rename = "hashed_password")]
    pub password: String,
}

impl NewAccount {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
