use dioxus::prelude::*;
use ui::views::SnippetDetailView;

use crate::Route;

#[component]
pub fn SnippetDetail(id: i32) -> Element {
    let nav = use_navigator();

    rsx! {
        SnippetDetailView {
            key: "{id}",
            id: id,
            on_back: move |_| {
                nav.push(Route::Snippets {});
            },
        }
    }
}
