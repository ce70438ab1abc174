//! Snippet list state and cards.
//!
//! Votes are optimistic: [`apply_vote`] bumps the local counter at once and
//! [`send_vote`] fires the mutation afterwards. The server's count is never
//! read back, so the displayed number can drift from the authoritative one.

use api::{ApiError, Snippet, SnippetApi};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vote {
    Like,
    Dislike,
}

/// Increment the matching snippet's counter. Returns `false` if no snippet
/// has that id.
pub fn apply_vote(snippets: &mut [Snippet], id: i32, vote: Vote) -> bool {
    let Some(snippet) = snippets.iter_mut().find(|s| s.id == id) else {
        return false;
    };
    match vote {
        Vote::Like => snippet.likes = snippet.likes.saturating_add(1),
        Vote::Dislike => snippet.dislikes = snippet.dislikes.saturating_add(1),
    }
    true
}

/// Send the vote to the backend. The response body is ignored.
pub async fn send_vote<A: SnippetApi>(api: &A, id: i32, vote: Vote) -> Result<(), ApiError> {
    match vote {
        Vote::Like => api.like_snippet(id).await.map(|_| ()),
        Vote::Dislike => api.dislike_snippet(id).await.map(|_| ()),
    }
}

/// One snippet with its vote buttons.
#[component]
pub fn SnippetCard(
    snippet: Snippet,
    on_vote: EventHandler<(i32, Vote)>,
    #[props(default)] on_open: EventHandler<i32>,
) -> Element {
    let id = snippet.id;

    rsx! {
        div {
            class: "snippet-card",

            h2 {
                class: "snippet-title",
                onclick: move |_| on_open.call(id),
                "{snippet.title}"
            }
            pre {
                class: "snippet-content",
                code { "{snippet.content}" }
            }
            p {
                class: "snippet-language",
                "Language: {snippet.language}"
            }

            div {
                class: "snippet-votes",
                button {
                    class: "vote-btn vote-btn--like",
                    onclick: move |_| on_vote.call((id, Vote::Like)),
                    "Like ({snippet.likes})"
                }
                button {
                    class: "vote-btn vote-btn--dislike",
                    onclick: move |_| on_vote.call((id, Vote::Dislike)),
                    "Dislike ({snippet.dislikes})"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{DislikeCount, LikeCount, Recommendation, SnippetDraft};
    use std::cell::RefCell;

    fn snippet(id: i32, likes: u32, dislikes: u32) -> Snippet {
        Snippet {
            id,
            title: format!("snippet {id}"),
            content: "fn main() {}".to_string(),
            language: "rust".to_string(),
            likes,
            dislikes,
        }
    }

    /// Backend whose vote mutations always fail.
    #[derive(Default)]
    struct Unreachable {
        votes: RefCell<Vec<(i32, Vote)>>,
    }

    impl SnippetApi for Unreachable {
        async fn get_all_snippets(&self) -> Result<Vec<Snippet>, ApiError> {
            Err(ApiError::MissingData("getAllSnippets"))
        }

        async fn get_snippet(&self, _id: i32) -> Result<Snippet, ApiError> {
            Err(ApiError::MissingData("getSnippet"))
        }

        async fn create_snippet(&self, _draft: &SnippetDraft) -> Result<Snippet, ApiError> {
            Err(ApiError::MissingData("createSnippet"))
        }

        async fn like_snippet(&self, snippet_id: i32) -> Result<LikeCount, ApiError> {
            self.votes.borrow_mut().push((snippet_id, Vote::Like));
            Err(ApiError::Status {
                status: 503,
                detail: None,
            })
        }

        async fn dislike_snippet(&self, snippet_id: i32) -> Result<DislikeCount, ApiError> {
            self.votes.borrow_mut().push((snippet_id, Vote::Dislike));
            Err(ApiError::Status {
                status: 503,
                detail: None,
            })
        }

        async fn get_recommendations_for_user(
            &self,
            _user_id: i32,
        ) -> Result<Vec<Recommendation>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_like_updates_count_immediately() {
        let mut snippets = vec![snippet(1, 3, 0), snippet(2, 0, 0)];
        assert!(apply_vote(&mut snippets, 1, Vote::Like));
        assert_eq!(snippets[0].likes, 4);
        assert_eq!(snippets[1].likes, 0);
    }

    #[test]
    fn test_dislike_only_touches_dislikes() {
        let mut snippets = vec![snippet(5, 2, 7)];
        assert!(apply_vote(&mut snippets, 5, Vote::Dislike));
        assert_eq!(snippets[0].likes, 2);
        assert_eq!(snippets[0].dislikes, 8);
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut snippets = vec![snippet(1, 3, 0)];
        assert!(!apply_vote(&mut snippets, 42, Vote::Like));
        assert_eq!(snippets, vec![snippet(1, 3, 0)]);
    }

    #[tokio::test]
    async fn test_failed_vote_is_not_rolled_back() {
        let api = Unreachable::default();
        let mut snippets = vec![snippet(1, 3, 0)];

        apply_vote(&mut snippets, 1, Vote::Like);
        assert!(send_vote(&api, 1, Vote::Like).await.is_err());

        assert_eq!(snippets[0].likes, 4);
        assert_eq!(*api.votes.borrow(), vec![(1, Vote::Like)]);
    }

    #[tokio::test]
    async fn test_dislike_hits_dislike_mutation() {
        let api = Unreachable::default();
        let _ = send_vote(&api, 9, Vote::Dislike).await;
        assert_eq!(*api.votes.borrow(), vec![(9, Vote::Dislike)]);
    }
}
