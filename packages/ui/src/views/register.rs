//! Shared registration form view.

use dioxus::prelude::*;

use crate::dialog::alert;
use crate::floating_input::FloatingInput;
use crate::forms::RegisterForm;
use crate::session::Submission;
use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Registration form. Success does not sign in; `on_success` usually
/// navigates to the login page.
#[component]
pub fn RegisterView(on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegisterForm {
            username: username(),
            email: email(),
            password: password(),
        };
        spawn(async move {
            submitting.set(true);
            let outcome = auth.submit_register(&form).await;
            submitting.set(false);
            match outcome {
                Submission::Blocked => alert("Please fill in username, email and password."),
                Submission::Failed => alert("Registration failed. Please try again."),
                Submission::Accepted(()) => on_success.call(()),
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
                h1 { class: "auth-title", "Create an account" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    FloatingInput {
                        id: "register-username",
                        label: "Choose a username",
                        value: username(),
                        oninput: move |v: String| username.set(v),
                    }

                    FloatingInput {
                        id: "register-email",
                        label: "Enter your email",
                        input_type: "email",
                        value: email(),
                        oninput: move |v: String| email.set(v),
                    }

                    FloatingInput {
                        id: "register-password",
                        label: "Choose a password",
                        input_type: "password",
                        value: password(),
                        oninput: move |v: String| password.set(v),
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Sign Up" }
                    }
                }

                div {
                    class: "auth-footer",
                    span { "Already have an account? " }
                    a { href: "/login", "Login" }
                }
            }
        }
    }
}
