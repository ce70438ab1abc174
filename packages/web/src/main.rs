use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Login, NewSnippet, Protected, Register, SnippetDetail, Snippets};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/")]
        Snippets {},
        #[route("/snippets/new")]
        NewSnippet {},
        #[route("/snippets/:id")]
        SnippetDetail { id: i32 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
