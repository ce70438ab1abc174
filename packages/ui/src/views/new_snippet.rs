use api::SnippetApi;
use dioxus::prelude::*;

use crate::dialog::alert;
use crate::floating_input::FloatingInput;
use crate::forms::SnippetForm;
use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Form for sharing a new snippet as the signed-in user.
#[component]
pub fn NewSnippetView(on_created: EventHandler<i32>, on_cancel: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut title = use_signal(String::new);
    let mut language = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(user_id) = auth.user().and_then(|u| u.id) else {
            alert("Your profile has no id; sign in again to share snippets.");
            return;
        };
        let form = SnippetForm {
            title: title(),
            language: language(),
            content: content(),
        };
        let Some(draft) = form.draft(user_id) else {
            alert("Please fill in title, language and content.");
            return;
        };
        spawn(async move {
            submitting.set(true);
            let result = auth.client().create_snippet(&draft).await;
            submitting.set(false);
            match result {
                Ok(created) => on_created.call(created.id),
                Err(e) => {
                    tracing::error!("Error creating snippet: {}", e);
                    alert("Could not create the snippet. Please try again.");
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "snippet-page",
            h1 { class: "snippet-page-title", "New snippet" }

            form {
                class: "snippet-form",
                onsubmit: handle_submit,

                FloatingInput {
                    id: "snippet-title",
                    label: "Title",
                    value: title(),
                    oninput: move |v: String| title.set(v),
                }

                FloatingInput {
                    id: "snippet-language",
                    label: "Language (e.g. python)",
                    value: language(),
                    oninput: move |v: String| language.set(v),
                }

                textarea {
                    class: "snippet-editor",
                    placeholder: "Paste your code here",
                    rows: "12",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }

                div {
                    class: "form-actions",
                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Sharing..." } else { "Share" }
                    }
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
