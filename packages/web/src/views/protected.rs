//! Layout for every route that needs a signed-in user.

use dioxus::prelude::*;
use ui::{route_access, use_auth, Navbar, RouteAccess};

use crate::Route;

/// Renders the child route with the navbar when a user is present;
/// otherwise sends the visitor to the login page.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match route_access(&auth.session()) {
        RouteAccess::Granted => rsx! {
            Navbar {
                Link { to: Route::Snippets {}, "Snippets" }
                Link { to: Route::NewSnippet {}, "New snippet" }
            }
            Outlet::<Route> {}
        },
        RouteAccess::Redirect => {
            tracing::debug!("No signed-in user, redirecting to {}", ui::LOGIN_PATH);
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}
