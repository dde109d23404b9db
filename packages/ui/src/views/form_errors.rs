use dioxus::prelude::*;

/// Validation messages for one field, or for the whole form.
#[component]
pub fn FieldErrors(messages: Vec<String>) -> Element {
    rsx! {
        if !messages.is_empty() {
            ul {
                class: "errorlist",
                for message in messages.iter() {
                    li { "{message}" }
                }
            }
        }
    }
}
