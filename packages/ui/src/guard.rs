//! Client-side route access decision.
//!
//! Only used to decide what to render. The backend authorises every request
//! on its own, so this is not a security boundary.

use store::Session;

/// Path anonymous visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking a protected route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    Redirect,
}

/// Protected content is shown only when a user is present.
pub fn route_access(session: &Session) -> RouteAccess {
    if session.user.is_some() {
        RouteAccess::Granted
    } else {
        RouteAccess::Redirect
    }
}
