//! Authentication context and hooks for the UI.

use api::{Credentials, NewAccount, UserProfile};
use dioxus::prelude::*;
use store::Session;

use crate::client::{make_client, Client};
use crate::forms::{LoginForm, RegisterForm};
use crate::session::{self, Submission};

/// Handle to the session shared by every view.
///
/// The session itself is an immutable [`Session`] value held in a signal;
/// every operation computes the next value, persists it and swaps it in.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    session: Signal<Session>,
    client: Signal<Client>,
}

impl AuthContext {
    /// Current session. Subscribes the calling component to changes.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    /// API client authenticated from the persisted token.
    pub fn client(&self) -> Client {
        self.client.peek().clone()
    }

    fn replace(&self, next: Session) {
        let mut session = self.session;
        session.set(next);
    }

    /// Sign in. Returns `true` only if both the token exchange and the
    /// profile fetch succeeded.
    pub async fn login(&self, identifier: &str, password: &str) -> bool {
        let client = self.client();
        let current = self.session.peek().clone();
        let credentials = Credentials::new(identifier, password);
        match session::login(&client, client.store(), &current, &credentials).await {
            Some(next) => {
                self.replace(next);
                true
            }
            None => false,
        }
    }

    /// Create an account without signing in.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let client = self.client();
        session::register(&client, &NewAccount::new(username, email, password)).await
    }

    /// Forget the token and user, here and in storage.
    pub fn logout(&self) {
        let client = self.client();
        let current = self.session.peek().clone();
        self.replace(session::logout(client.store(), &current));
    }

    /// Submit the login form. Blank fields never reach the network.
    pub async fn submit_login(&self, form: &LoginForm) -> Submission<Session> {
        let client = self.client();
        let current = self.session.peek().clone();
        let outcome = session::submit_login(&client, client.store(), &current, form).await;
        if let Submission::Accepted(next) = &outcome {
            self.replace(next.clone());
        }
        outcome
    }

    /// Submit the registration form. Blank fields never reach the network.
    pub async fn submit_register(&self, form: &RegisterForm) -> Submission<()> {
        let client = self.client();
        session::submit_register(&client, form).await
    }
}

/// Get the authentication context provided by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
///
/// The session is rehydrated from durable storage once, on mount. A corrupt
/// persisted session is discarded and the app starts signed out.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    use_context_provider(|| {
        let client = make_client();
        let restored = store::load_session(client.store());
        if let Some(user) = &restored.user {
            tracing::info!("Restored session for {}", user.username);
        }
        AuthContext {
            session: Signal::new(restored),
            client: Signal::new(client),
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| auth.logout(),
            "{label}"
        }
    }
}
