//! # Session operations behind the auth context
//!
//! Platform-independent halves of [`crate::AuthContext`]'s operations. They
//! take the API, the durable store and the current [`Session`] explicitly and
//! return the next session, so they can be exercised without a renderer.
//!
//! | Operation | Network | Storage |
//! |-----------|---------|---------|
//! | [`login`] | `/auth/login` then `/auth/me` | written only if both succeed |
//! | [`register`] | `/auth/register` | untouched |
//! | [`logout`] | none | `token` and `user` removed |
//! | [`submit_login`] | as [`login`], skipped for blank fields | as [`login`] |

use api::auth::{sign_in, sign_up, SignedIn};
use api::{AuthApi, Credentials, NewAccount};
use store::{KeyValueStore, Session, SessionAction};

use crate::forms::{LoginForm, RegisterForm};

/// Sign in and persist the new session.
///
/// Returns `None` on any failure; `current` and the store are left as they
/// were.
pub async fn login<A: AuthApi, S: KeyValueStore>(
    api: &A,
    store: &S,
    current: &Session,
    credentials: &Credentials,
) -> Option<Session> {
    match sign_in(api, credentials).await {
        Ok(SignedIn { token, user }) => {
            tracing::info!("Signed in as {}", user.username);
            Some(store::commit(
                store,
                current.clone(),
                SessionAction::SignedIn { token, user },
            ))
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            None
        }
    }
}

/// Create an account. Never establishes a session.
pub async fn register<A: AuthApi>(api: &A, account: &NewAccount) -> bool {
    match sign_up(api, account).await {
        Ok(user) => {
            tracing::info!("Registered {}", user.username);
            true
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            false
        }
    }
}

/// Clear the session and its persisted copy.
pub fn logout<S: KeyValueStore>(store: &S, current: &Session) -> Session {
    tracing::info!("Signing out");
    store::commit(store, current.clone(), SessionAction::SignedOut)
}

/// What happened to a submitted form.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<T> {
    /// A required field was blank; nothing was sent.
    Blocked,
    /// The backend rejected the request or could not be reached.
    Failed,
    Accepted(T),
}

/// Validate the login form and sign in with it.
pub async fn submit_login<A: AuthApi, S: KeyValueStore>(
    api: &A,
    store: &S,
    current: &Session,
    form: &LoginForm,
) -> Submission<Session> {
    let Some(credentials) = form.credentials() else {
        return Submission::Blocked;
    };
    match login(api, store, current, &credentials).await {
        Some(session) => Submission::Accepted(session),
        None => Submission::Failed,
    }
}

/// Validate the registration form and create the account.
pub async fn submit_register<A: AuthApi>(api: &A, form: &RegisterForm) -> Submission<()> {
    let Some(account) = form.account() else {
        return Submission::Blocked;
    };
    if register(api, &account).await {
        Submission::Accepted(())
    } else {
        Submission::Failed
    }
}
