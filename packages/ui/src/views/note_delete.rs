use dioxus::prelude::*;
use store::Note;

use crate::urls;

/// Confirmation step before a note is removed.
#[component]
pub fn NoteDelete(note: Note) -> Element {
    rsx! {
        h1 { "Delete note" }
        p { "Delete «{note.title}»? This cannot be undone." }
        form {
            method: "post",
            action: urls::note_delete(&note.slug),
            button { r#type: "submit", "Delete" }
            " "
            a { href: urls::note_detail(&note.slug), "Cancel" }
        }
    }
}
