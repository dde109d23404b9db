use dioxus::prelude::*;
use store::Note;

use crate::urls;

/// A single note with links to edit and delete it.
#[component]
pub fn NoteDetail(note: Note) -> Element {
    rsx! {
        article {
            class: "note",
            h1 { "{note.title}" }
            p { class: "note-text", "{note.text}" }
            p { class: "note-slug", "Slug: {note.slug}" }
        }
        p {
            a { href: urls::note_edit(&note.slug), "Edit" }
            " "
            a { href: urls::note_delete(&note.slug), "Delete" }
        }
    }
}
