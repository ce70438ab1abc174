//! # Session value, reducer and persistence
//!
//! A [`Session`] is an immutable value: the signed-in [`UserProfile`] and the
//! bearer token. It changes only through [`Session::apply`], which consumes
//! the current value and a [`SessionAction`] and returns the next value.
//!
//! Persistence is explicit rather than a side effect of rendering:
//!
//! - [`load_session`] rehydrates a session from a [`KeyValueStore`] at startup,
//! - [`persist_session`] mirrors a session into the store,
//! - [`commit`] applies an action and persists the result in one step.
//!
//! ## Invariant
//!
//! `token.is_some()` iff a sign-in completed and no sign-out happened since.
//! Sign-in sets token and user together, so a stored session holds both or
//! neither. Anything else found in storage (unparsable user, a token without a
//! user, a user without a token) is treated as corruption and reset.

use crate::models::UserProfile;
use crate::storage::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};

/// Client-held authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

/// State transitions of a [`Session`].
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// Both sign-in steps succeeded.
    SignedIn { token: String, user: UserProfile },
    /// The user asked to sign out.
    SignedOut,
    /// Persisted state was unusable.
    Reset,
}

impl Session {
    pub fn new(token: String, user: UserProfile) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// Reducer: compute the next session from this one and an action.
    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::SignedIn { token, user } => Self::new(token, user),
            SessionAction::SignedOut | SessionAction::Reset => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Rehydrate the session persisted in `store`.
///
/// Never fails: corrupt or torn state is removed from the store and an empty
/// session is returned.
pub fn load_session<S: KeyValueStore>(store: &S) -> Session {
    // An empty token counts as absent.
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let raw_user = store.get(USER_KEY);

    match (token, raw_user) {
        (None, None) => Session::default(),
        (Some(token), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Session::new(token, user),
            Err(e) => {
                tracing::warn!("Discarding unparsable stored user: {}", e);
                commit(store, Session::default(), SessionAction::Reset)
            }
        },
        (token, _) => {
            tracing::warn!(
                "Discarding partial stored session (token present: {})",
                token.is_some()
            );
            commit(store, Session::default(), SessionAction::Reset)
        }
    }
}

/// Mirror `session` into `store`: present values are written, absent ones
/// removed.
pub fn persist_session<S: KeyValueStore>(store: &S, session: &Session) -> Result<(), StorageError> {
    match &session.token {
        Some(token) => store.set(TOKEN_KEY, token)?,
        None => store.remove(TOKEN_KEY),
    }
    match &session.user {
        Some(user) => {
            let json = serde_json::to_string(user)?;
            store.set(USER_KEY, &json)?;
        }
        None => store.remove(USER_KEY),
    }
    Ok(())
}

/// Apply `action` to `current` and persist the resulting session.
///
/// The in-memory result is returned even if the write fails; the failure is
/// logged. A failed write can leave storage half-updated, which
/// [`load_session`] resets on the next start.
pub fn commit<S: KeyValueStore>(store: &S, current: Session, action: SessionAction) -> Session {
    let next = current.apply(action);
    if let Err(e) = persist_session(store, &next) {
        tracing::error!("Failed to persist session: {}", e);
    }
    next
}
