use dioxus::prelude::*;

use crate::Navbar;

const STYLE: &str = "
body { font-family: -apple-system, BlinkMacSystemFont, Helvetica, Arial, sans-serif; margin: 0; color: #37352f; }
.navbar { display: flex; gap: 1.5rem; align-items: center; padding: 0.75rem 2rem; border-bottom: 1px solid #e9e9e7; }
.navbar nav { display: flex; gap: 1rem; }
.brand { font-weight: 700; text-decoration: none; color: inherit; }
.viewer { color: #787774; }
.content { max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
.errorlist { color: #d44c47; padding-left: 1rem; }
textarea { width: 100%; min-height: 8rem; }
";

/// Page shell shared by every view.
#[component]
pub fn Layout(
    /// Shown in the browser tab.
    title: String,
    /// Username of the logged in user, if any.
    viewer: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "{title} | YaNote" }
                style { {STYLE} }
            }
            body {
                Navbar { viewer }
                main { class: "content", {children} }
            }
        }
    }
}
