use dioxus::prelude::*;

use crate::urls;

/// Landing page, open to everyone.
#[component]
pub fn Home(logged_in: bool) -> Element {
    rsx! {
        h1 { "YaNote" }
        p { "A tiny place for your personal notes. Only you can see what you write." }
        if logged_in {
            p {
                a { href: urls::NOTE_LIST, "Go to my notes" }
            }
        } else {
            p {
                a { href: urls::LOGIN, "Log in" }
                " or "
                a { href: urls::SIGNUP, "create an account" }
                " to start writing."
            }
        }
    }
}
