//! # Pages — complete HTML documents for the HTTP handlers
//!
//! | Function | Page |
//! |----------|------|
//! | [`home`] | Landing page, anonymous or logged in |
//! | [`note_list`] | The requester's notes |
//! | [`note_detail`] | One note |
//! | [`note_form`] | Create or edit form, optionally with validation errors |
//! | [`note_delete`] | Delete confirmation |
//! | [`success`] | After a successful write |
//! | [`login`], [`signup`], [`logged_out`] | Authentication pages |
//! | [`not_found`], [`server_error`] | Error pages |
//!
//! `viewer` is the username of the logged in user and drives the navbar.

use dioxus::prelude::*;
use store::{FormErrors, Note};

use crate::views::{
    Home, LoggedOut, Login, NotFound, NoteDelete, NoteDetail, NoteDraft, NoteForm, Notes,
    ServerError, Signup, Success,
};
use crate::{render, urls, Layout};

/// Which note form is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode<'a> {
    Create,
    /// Editing the note currently stored under this slug.
    Edit(&'a str),
}

pub fn home(viewer: Option<&str>) -> String {
    render(rsx! {
        Layout {
            title: "Home",
            viewer: viewer.map(str::to_string),
            Home { logged_in: viewer.is_some() }
        }
    })
}

pub fn note_list(viewer: &str, notes: Vec<Note>) -> String {
    render(rsx! {
        Layout {
            title: "My notes",
            viewer: Some(viewer.to_string()),
            Notes { notes }
        }
    })
}

pub fn note_detail(viewer: &str, note: &Note) -> String {
    render(rsx! {
        Layout {
            title: note.title.clone(),
            viewer: Some(viewer.to_string()),
            NoteDetail { note: note.clone() }
        }
    })
}

pub fn note_form(viewer: &str, mode: FormMode<'_>, draft: NoteDraft, errors: &FormErrors) -> String {
    let (heading, action, submit) = match mode {
        FormMode::Create => ("Add note", urls::NOTE_ADD.to_string(), "Create"),
        FormMode::Edit(slug) => ("Edit note", urls::note_edit(slug), "Save"),
    };
    render(rsx! {
        Layout {
            title: heading.to_string(),
            viewer: Some(viewer.to_string()),
            NoteForm {
                heading: heading.to_string(),
                action,
                draft,
                errors: errors.clone(),
                submit: submit.to_string(),
            }
        }
    })
}

pub fn note_delete(viewer: &str, note: &Note) -> String {
    render(rsx! {
        Layout {
            title: "Delete note",
            viewer: Some(viewer.to_string()),
            NoteDelete { note: note.clone() }
        }
    })
}

pub fn success(viewer: &str) -> String {
    render(rsx! {
        Layout {
            title: "Done",
            viewer: Some(viewer.to_string()),
            Success {}
        }
    })
}

pub fn login(next: Option<&str>, username: &str, errors: &FormErrors) -> String {
    render(rsx! {
        Layout {
            title: "Log in",
            viewer: None::<String>,
            Login {
                username: username.to_string(),
                next: next.map(str::to_string),
                errors: errors.clone(),
            }
        }
    })
}

pub fn signup(username: &str, errors: &FormErrors) -> String {
    render(rsx! {
        Layout {
            title: "Sign up",
            viewer: None::<String>,
            Signup { username: username.to_string(), errors: errors.clone() }
        }
    })
}

pub fn logged_out() -> String {
    render(rsx! {
        Layout {
            title: "Logged out",
            viewer: None::<String>,
            LoggedOut {}
        }
    })
}

pub fn not_found(viewer: Option<&str>) -> String {
    render(rsx! {
        Layout {
            title: "Not found",
            viewer: viewer.map(str::to_string),
            NotFound {}
        }
    })
}

pub fn server_error() -> String {
    render(rsx! {
        Layout {
            title: "Error",
            viewer: None::<String>,
            ServerError {}
        }
    })
}
