use dioxus::prelude::*;
use store::FormErrors;

use super::FieldErrors;

/// Values shown in the note form: empty for a new note, the stored values when
/// editing, or whatever was submitted when validation failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
    pub slug: String,
}

/// Create and edit form for a note.
#[component]
pub fn NoteForm(
    heading: String,
    /// Where the form posts to.
    action: String,
    draft: NoteDraft,
    #[props(default)] errors: FormErrors,
    #[props(default = "Save".to_string())] submit: String,
) -> Element {
    rsx! {
        h1 { "{heading}" }
        form {
            method: "post",
            action: "{action}",
            FieldErrors { messages: errors.general().to_vec() }
            p {
                label {
                    "Title "
                    input { r#type: "text", name: "title", value: "{draft.title}" }
                }
            }
            FieldErrors { messages: errors.field("title").to_vec() }
            p {
                label {
                    "Text "
                    textarea { name: "text", "{draft.text}" }
                }
            }
            FieldErrors { messages: errors.field("text").to_vec() }
            p {
                label {
                    "Slug "
                    input { r#type: "text", name: "slug", value: "{draft.slug}" }
                }
                small { " Leave empty to generate it from the title." }
            }
            FieldErrors { messages: errors.field("slug").to_vec() }
            button { r#type: "submit", "{submit}" }
        }
    }
}
