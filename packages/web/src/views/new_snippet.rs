use dioxus::prelude::*;
use ui::views::NewSnippetView;

use crate::Route;

#[component]
pub fn NewSnippet() -> Element {
    let nav = use_navigator();

    rsx! {
        NewSnippetView {
            on_created: move |id: i32| {
                tracing::info!("Created snippet {}", id);
                nav.replace(Route::SnippetDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::Snippets {});
            },
        }
    }
}
