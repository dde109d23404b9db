//! This crate contains the server-rendered pages of YaNote.
//!
//! Pages are Dioxus components rendered to a string with `dioxus-ssr`; text and
//! attribute values are escaped by the renderer. The [`pages`] module is the
//! entry point used by the HTTP handlers: one function per page, each returning
//! a complete HTML document.

use dioxus::prelude::*;

pub mod pages;
pub mod urls;
pub mod views;

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

pub use views::NoteDraft;

/// Render a top-level element into an HTML document.
pub fn render(page: Element) -> String {
    let mut html = String::from("<!DOCTYPE html>");
    html.push_str(&dioxus_ssr::render_element(page));
    html
}
