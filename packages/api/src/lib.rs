//! # API crate: REST and GraphQL facade for SnippetFlow
//!
//! Everything the web client says to the backend goes through this crate.
//! Each facade call is exactly one remote request with a fixed shape: no
//! validation, retries or caching happen here, and every failure reaches the
//! caller unchanged as an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Two-step sign-in (`/auth/login` then `/auth/me`) and registration |
//! | [`client`] | [`ApiClient`]: one `reqwest` client, bearer token injected from storage |
//! | [`config`] | [`ApiConfig`]: backend origin and GraphQL path |
//! | [`error`] | [`ApiError`] taxonomy (transport, status, GraphQL, decode) |
//! | [`graphql`] | Operation documents and the `{data, errors}` envelope |
//! | [`models`] | Wire models (`Snippet`, `Recommendation`, auth payloads) |
//!
//! ## Facade traits
//!
//! The facade is split into [`AuthApi`] and [`SnippetApi`] so the session
//! layer and views can be driven by in-memory fakes. [`ApiClient`] implements
//! both against the real backend:
//!
//! - **Authentication (REST)**: `login`, `register`, `get_current_user_with`
//! - **Snippets (GraphQL)**: `get_all_snippets`, `get_snippet`, `create_snippet`,
//!   `like_snippet`, `dislike_snippet`, `get_recommendations_for_user`

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;

use std::future::Future;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Credentials, DislikeCount, LikeCount, NewAccount, Recommendation, Snippet, SnippetDraft,
    TokenResponse, UserProfile,
};

/// REST authentication endpoints.
pub trait AuthApi {
    /// `POST /auth/login` with a form-encoded body.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    /// `POST /auth/register` with a JSON body.
    fn register(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<UserProfile, ApiError>>;

    /// `GET /auth/me` authenticated with `token`.
    fn get_current_user_with(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<UserProfile, ApiError>>;
}

/// GraphQL snippet operations.
pub trait SnippetApi {
    fn get_all_snippets(&self) -> impl Future<Output = Result<Vec<Snippet>, ApiError>>;

    fn get_snippet(&self, id: i32) -> impl Future<Output = Result<Snippet, ApiError>>;

    fn create_snippet(
        &self,
        draft: &SnippetDraft,
    ) -> impl Future<Output = Result<Snippet, ApiError>>;

    fn like_snippet(&self, snippet_id: i32) -> impl Future<Output = Result<LikeCount, ApiError>>;

    fn dislike_snippet(
        &self,
        snippet_id: i32,
    ) -> impl Future<Output = Result<DislikeCount, ApiError>>;

    fn get_recommendations_for_user(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Vec<Recommendation>, ApiError>>;
}
