use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the app name, the signed-in user and platform links.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "SnippetFlow" }
            div {
                class: "navbar-links",
                {children}
            }
            if let Some(user) = auth.user() {
                span {
                    class: "navbar-user",
                    "{user.display_name()}"
                }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
