use api::{Snippet, SnippetApi};
use dioxus::prelude::*;

use crate::snippets::{apply_vote, send_vote, SnippetCard, Vote};
use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// A single snippet fetched by id.
#[component]
pub fn SnippetDetailView(id: i32, on_back: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut snippet = use_signal(|| Option::<Snippet>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match auth.client().get_snippet(id).await {
            Ok(fetched) => snippet.set(Some(fetched)),
            Err(e) => {
                tracing::error!("Error fetching snippet {}: {}", id, e);
                error.set(Some(e.to_string()));
            }
        }
    });

    let handle_vote = move |(id, vote): (i32, Vote)| {
        if let Some(current) = snippet.write().as_mut() {
            apply_vote(std::slice::from_mut(current), id, vote);
        }
        spawn(async move {
            if let Err(e) = send_vote(&auth.client(), id, vote).await {
                tracing::error!("Error sending {:?} for snippet {}: {}", vote, id, e);
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "snippet-page",
            button {
                class: "link-btn",
                onclick: move |_| on_back.call(()),
                "< All snippets"
            }

            if let Some(current) = snippet() {
                SnippetCard {
                    snippet: current,
                    on_vote: handle_vote,
                }
            } else if let Some(err) = error() {
                p { class: "snippet-error", "Could not load snippet: {err}" }
            } else {
                p { class: "snippet-empty", "Loading snippet..." }
            }
        }
    }
}
