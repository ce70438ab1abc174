//! Login page view.

use dioxus::prelude::*;
use ui::{use_auth, views::LoginView};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in
    if auth.user().is_some() {
        nav.replace(Route::Snippets {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Snippets {});
            },
        }
    }
}
