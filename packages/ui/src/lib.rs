//! This crate contains all shared UI for the workspace.

mod client;
pub use client::{make_client, make_store, Client, PlatformStore};

mod dialog;
pub use dialog::alert;

pub mod forms;
pub use forms::{FieldState, LoginForm, RegisterForm, SnippetForm};

pub mod guard;
pub use guard::{route_access, RouteAccess, LOGIN_PATH};

pub mod session;
pub use session::Submission;

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, LogoutButton};

mod floating_input;
pub use floating_input::FloatingInput;

mod navbar;
pub use navbar::Navbar;

mod snippets;
pub use snippets::{apply_vote, send_vote, SnippetCard, Vote};

pub mod views;
