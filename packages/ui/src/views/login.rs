//! Shared login form view.

use dioxus::prelude::*;
use store::Session;

use crate::dialog::alert;
use crate::floating_input::FloatingInput;
use crate::forms::LoginForm;
use crate::session::Submission;
use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// What the login view does with a submission outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoginReaction {
    /// Show a blocking alert and stay on the page.
    Alert(&'static str),
    /// Hand over to `on_success`.
    Proceed,
}

pub(crate) fn login_reaction(outcome: &Submission<Session>) -> LoginReaction {
    match outcome {
        Submission::Blocked => LoginReaction::Alert("Please enter both email and password."),
        Submission::Failed => LoginReaction::Alert("Login failed. Please check your credentials."),
        Submission::Accepted(_) => LoginReaction::Proceed,
    }
}

/// Login form. Platform packages decide where `on_success` navigates.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm::new(identifier(), password());
        spawn(async move {
            submitting.set(true);
            let outcome = auth.submit_login(&form).await;
            submitting.set(false);
            match login_reaction(&outcome) {
                LoginReaction::Alert(message) => alert(message),
                LoginReaction::Proceed => on_success.call(()),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "auth-page",
            div { class: "auth-brand", "Snippet Flow" }

            div {
                class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    FloatingInput {
                        id: "login-identifier",
                        label: "Enter your email",
                        input_type: "email",
                        value: identifier(),
                        oninput: move |v: String| identifier.set(v),
                    }

                    FloatingInput {
                        id: "login-password",
                        label: "Enter your password",
                        input_type: "password",
                        value: password(),
                        oninput: move |v: String| password.set(v),
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Login" }
                    }
                }

                div {
                    class: "auth-footer",
                    span { "Don't have an account? " }
                    a { href: "/register", "Sign Up" }
                }
            }
        }
    }
}
