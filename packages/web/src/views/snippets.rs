use dioxus::prelude::*;
use ui::views::SnippetListView;

use crate::Route;

#[component]
pub fn Snippets() -> Element {
    let nav = use_navigator();

    rsx! {
        SnippetListView {
            on_open: move |id: i32| {
                nav.push(Route::SnippetDetail { id });
            },
        }
    }
}
