//! Snippet and recommendation models returned by the GraphQL endpoint.

use serde::{Deserialize, Serialize};

/// A shared code snippet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub language: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

/// Fields of a snippet about to be created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDraft {
    pub title: String,
    pub content: String,
    pub language: String,
    pub user_id: i32,
}

/// `likeSnippet` mutation result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LikeCount {
    pub id: i32,
    pub likes: u32,
}

/// `dislikeSnippet` mutation result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DislikeCount {
    pub id: i32,
    pub dislikes: u32,
}

/// One entry of `getRecommendationsForUser`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub snippet_id: i32,
    pub score: f64,
}
