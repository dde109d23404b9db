//! # Store crate — domain core of YaNote
//!
//! Everything in this crate is free of HTTP and SQL so that it can be shared by
//! the page renderer (`ui`) and the server (`api`).
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`Note`], [`NewNote`], [`NoteChanges`] |
//! | [`slug`] | Slug generator: transliterated, lowercase, hyphenated identifiers |
//! | [`policy`] | Authorization: only the author may view, edit or delete a note |
//! | [`repo`] | [`NoteStore`] persistence contract and [`StoreError`] |
//! | [`validation`] | Form schemas and [`FormErrors`] |
//!
//! [`MemoryStore`] is the in-process [`NoteStore`] used by tests.

pub mod models;
pub mod policy;
pub mod repo;
pub mod slug;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

pub use models::{NewNote, Note, NoteChanges, NoteId, UserId};
pub use repo::{NoteStore, StoreError, StoreResult};
pub use slug::{resolve_slug, slugify, SLUG_MAX_LEN};
pub use validation::{FormErrors, FormFields};
