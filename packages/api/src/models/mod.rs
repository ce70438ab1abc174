//! Data models exchanged with the backend.

mod auth;
mod snippet;

pub use auth::{Credentials, NewAccount, TokenResponse};
pub use snippet::{DislikeCount, LikeCount, Recommendation, Snippet, SnippetDraft};
pub use store::UserProfile;
