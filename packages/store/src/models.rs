//! # Client-side user model
//!
//! [`UserProfile`] is what `GET /auth/me` returns and what the session keeps
//! under the `user` storage key. It lives in this crate (rather than `api`) so
//! the session layer can persist it without depending on the HTTP client.
//!
//! The backend echoes its whole user row, including the password hash; serde
//! ignores every field not listed here, so the hash is never deserialised and
//! never written to local storage.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Numeric id assigned by the server. Needed for snippet creation and
    /// recommendations.
    #[serde(default)]
    pub id: Option<i32>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

impl UserProfile {
    /// Get display name, falling back to username if full name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}
