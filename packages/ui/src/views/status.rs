use dioxus::prelude::*;

use crate::urls;

/// Shown after a note was created, edited or deleted.
#[component]
pub fn Success() -> Element {
    rsx! {
        h1 { "Done!" }
        p { "The operation completed successfully." }
        p {
            a { href: urls::NOTE_LIST, "Back to my notes" }
        }
    }
}

#[component]
pub fn NotFound() -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "There is nothing at this address." }
        p {
            a { href: urls::HOME, "Home" }
        }
    }
}

#[component]
pub fn ServerError() -> Element {
    rsx! {
        h1 { "Something went wrong" }
        p { "The server could not complete the request. Please try again later." }
    }
}
