use dioxus::prelude::*;
use store::Note;

use crate::urls;

/// The requester's notes, in the order they were written.
#[component]
pub fn Notes(notes: Vec<Note>) -> Element {
    rsx! {
        h1 { "My notes" }
        if notes.is_empty() {
            p { class: "empty", "You have no notes yet." }
        } else {
            ul {
                class: "note-list",
                for note in notes.iter() {
                    li {
                        key: "{note.slug}",
                        a { href: urls::note_detail(&note.slug), "{note.title}" }
                    }
                }
            }
        }
        p {
            a { href: urls::NOTE_ADD, "Add note" }
        }
    }
}
