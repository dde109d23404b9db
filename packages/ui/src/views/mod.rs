//! Page bodies. Every view renders inside [`crate::Layout`].

mod auth;
mod form_errors;
mod home;
mod note_delete;
mod note_detail;
mod note_form;
mod notes;
mod status;

pub use auth::{LoggedOut, Login, Signup};
pub use form_errors::FieldErrors;
pub use home::Home;
pub use note_delete::NoteDelete;
pub use note_detail::NoteDetail;
pub use note_form::{NoteDraft, NoteForm};
pub use notes::Notes;
pub use status::{NotFound, ServerError, Success};
