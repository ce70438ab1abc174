//! # Form state for login, registration and snippet creation
//!
//! Forms hold their text in component-local signals until submission. The
//! only client-side validation is a non-empty check on trimmed input; format
//! checks (email shape, password strength) are left to the backend. Values
//! that pass are sent exactly as typed.
//!
//! [`FieldState`] drives the floating labels: purely presentational, it
//! tracks whether a field is focused and whether it held non-blank text the
//! last time it lost focus.

use api::{Credentials, NewAccount, SnippetDraft};

/// Focus/text state behind a floating label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub focused: bool,
    pub has_text: bool,
}

impl FieldState {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self, value: &str) {
        self.focused = false;
        self.has_text = !value.trim().is_empty();
    }

    /// The label sits above the input while focused or filled.
    pub fn is_floating(&self) -> bool {
        self.focused || self.has_text
    }

    pub fn label_class(&self) -> &'static str {
        if self.focused {
            "floating-label floating-label--raised floating-label--active"
        } else if self.is_floating() {
            "floating-label floating-label--raised"
        } else {
            "floating-label"
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Login form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Credentials to submit, or `None` when a field is blank.
    pub fn credentials(&self) -> Option<Credentials> {
        (filled(&self.identifier) && filled(&self.password))
            .then(|| Credentials::new(self.identifier.clone(), self.password.clone()))
    }
}

/// Registration form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Account to create, or `None` when a field is blank.
    pub fn account(&self) -> Option<NewAccount> {
        (filled(&self.username) && filled(&self.email) && filled(&self.password)).then(|| {
            NewAccount::new(
                self.username.clone(),
                self.email.clone(),
                self.password.clone(),
            )
        })
    }
}

/// New-snippet form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnippetForm {
    pub title: String,
    pub language: String,
    pub content: String,
}

impl SnippetForm {
    /// Draft owned by `user_id`, or `None` when a field is blank. Title and
    /// language are trimmed; content keeps its indentation.
    pub fn draft(&self, user_id: i32) -> Option<SnippetDraft> {
        (filled(&self.title) && filled(&self.language) && filled(&self.content)).then(|| {
            SnippetDraft {
                title: self.title.trim().to_string(),
                content: self.content.clone(),
                language: self.language.trim().to_lowercase(),
                user_id,
            }
        })
    }
}
