use dioxus::prelude::*;

use crate::urls;

/// Top navigation. Links depend on whether somebody is logged in.
#[component]
pub fn Navbar(viewer: Option<String>) -> Element {
    rsx! {
        header {
            class: "navbar",
            a { class: "brand", href: urls::HOME, "YaNote" }
            nav {
                if let Some(ref username) = viewer {
                    a { href: urls::NOTE_LIST, "My notes" }
                    a { href: urls::NOTE_ADD, "Add note" }
                    span { class: "viewer", "{username}" }
                    a { href: urls::LOGOUT, "Log out" }
                } else {
                    a { href: urls::LOGIN, "Log in" }
                    a { href: urls::SIGNUP, "Sign up" }
                }
            }
        }
    }
}
