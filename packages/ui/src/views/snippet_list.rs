use api::{Recommendation, Snippet, SnippetApi};
use dioxus::prelude::*;

use crate::snippets::{apply_vote, send_vote, SnippetCard, Vote};
use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// All snippets with optimistic like/dislike buttons.
///
/// The collection is fetched once on mount and never refreshed; vote counts
/// shown afterwards are local.
#[component]
pub fn SnippetListView(on_open: EventHandler<i32>) -> Element {
    let auth = use_auth();
    let mut snippets = use_signal(Vec::<Snippet>::new);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match auth.client().get_all_snippets().await {
            Ok(fetched) => snippets.set(fetched),
            Err(e) => tracing::error!("Error fetching snippets: {}", e),
        }
        loaded.set(true);
    });

    let handle_vote = move |(id, vote): (i32, Vote)| {
        apply_vote(&mut snippets.write(), id, vote);
        spawn(async move {
            if let Err(e) = send_vote(&auth.client(), id, vote).await {
                tracing::error!("Error sending {:?} for snippet {}: {}", vote, id, e);
            }
        });
    };

    let user_id = auth.user().and_then(|u| u.id);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "snippet-page",
            h1 { class: "snippet-page-title", "SnippetFlow" }

            if !snippets.read().is_empty() {
                div {
                    class: "snippet-grid",
                    for snippet in snippets() {
                        SnippetCard {
                            key: "{snippet.id}",
                            snippet: snippet.clone(),
                            on_vote: handle_vote,
                            on_open: on_open,
                        }
                    }
                }
            } else if loaded() {
                p { class: "snippet-empty", "No snippets yet." }
            } else {
                p { class: "snippet-empty", "Loading snippets..." }
            }

            if let Some(user_id) = user_id {
                Recommendations {
                    user_id: user_id,
                    snippets: snippets(),
                    on_open: on_open,
                }
            }
        }
    }
}

/// Snippets the backend recommends for `user_id`, best first.
#[component]
fn Recommendations(user_id: i32, snippets: Vec<Snippet>, on_open: EventHandler<i32>) -> Element {
    let auth = use_auth();
    let mut recommendations = use_signal(Vec::<Recommendation>::new);

    let _loader = use_resource(move || async move {
        match auth.client().get_recommendations_for_user(user_id).await {
            Ok(mut fetched) => {
                fetched.sort_by(|a, b| b.score.total_cmp(&a.score));
                recommendations.set(fetched);
            }
            Err(e) => tracing::error!("Error fetching recommendations: {}", e),
        }
    });

    if recommendations.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "recommendations",
            h2 { "Recommended for you" }
            ul {
                for (snippet_id, score) in recommendations().iter().map(|r| (r.snippet_id, r.score)) {
                    li {
                        key: "{snippet_id}",
                        class: "recommendation",
                        onclick: move |_| on_open.call(snippet_id),
                        span { class: "recommendation-title", {title_for(&snippets, snippet_id)} }
                        span { class: "recommendation-score", "{score:.2}" }
                    }
                }
            }
        }
    }
}

fn title_for(snippets: &[Snippet], snippet_id: i32) -> String {
    snippets
        .iter()
        .find(|s| s.id == snippet_id)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| format!("Snippet #{snippet_id}"))
}
