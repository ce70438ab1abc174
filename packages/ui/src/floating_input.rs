use dioxus::prelude::*;

use crate::forms::FieldState;

/// Text input whose label floats above it while focused or filled.
#[component]
pub fn FloatingInput(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let mut field = use_signal(FieldState::default);
    let current = value.clone();

    rsx! {
        div {
            class: "floating-field",
            input {
                id: "{id}",
                class: "floating-input",
                r#type: input_type,
                placeholder: "",
                value: value,
                onfocus: move |_| field.write().focus(),
                onblur: move |_| field.write().blur(&current),
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            label {
                class: field().label_class(),
                "{label}"
            }
        }
    }
}
