//! Paths of every page, shared by links in the views and by redirects.

pub const HOME: &str = "/";
pub const NOTE_LIST: &str = "/notes/";
pub const NOTE_ADD: &str = "/add/";
pub const SUCCESS: &str = "/done/";
pub const LOGIN: &str = "/auth/login/";
pub const LOGOUT: &str = "/auth/logout/";
pub const SIGNUP: &str = "/auth/signup/";

pub fn note_detail(slug: &str) -> String {
    format!("/note/{slug}/")
}

pub fn note_edit(slug: &str) -> String {
    format!("/edit/{slug}/")
}

pub fn note_delete(slug: &str) -> String {
    format!("/delete/{slug}/")
}
