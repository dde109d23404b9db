//! # Domain models for notes
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A persisted note: title, body text, unique slug and the id of its author. |
//! | [`NewNote`] | Input for [`crate::NoteStore::create`]. The slug is optional and resolved with [`crate::slug::resolve_slug`]. |
//! | [`NoteChanges`] | Input for [`crate::NoteStore::update`]. Replaces title, text and slug; the author never changes. |
//!
//! Identifiers are UUID v4 values. Users live in the auth layer; notes only keep
//! the author's [`UserId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::resolve_slug;

/// Identifier of a note row.
pub type NoteId = Uuid;
/// Identifier of the user who owns a note.
pub type UserId = Uuid;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// A note owned by exactly one author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Body of the note
    pub text: String,
    /// Globally unique, URL-safe identifier
    pub slug: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
}

/// A note that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub text: String,
    /// `None` or blank means "generate from the title".
    pub slug: Option<String>,
    pub author: UserId,
}

impl NewNote {
    pub fn new(title: impl Into<String>, text: impl Into<String>, author: UserId) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            slug: None,
            author,
        }
    }

    /// Builder method to set an explicit slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// The slug this note will be stored under.
    pub fn resolved_slug(&self) -> String {
        resolve_slug(self.slug.as_deref(), &self.title)
    }

    /// Materialise the stored record with a fresh id and timestamp.
    pub fn into_note(self) -> Note {
        let slug = self.resolved_slug();
        Note {
            id: Uuid::new_v4(),
            title: self.title,
            text: self.text,
            slug,
            author: self.author,
            created_at: Utc::now(),
        }
    }
}

/// Full replacement of the editable fields of a note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: String,
    pub text: String,
    pub slug: Option<String>,
}

impl NoteChanges {
    pub fn resolved_slug(&self) -> String {
        resolve_slug(self.slug.as_deref(), &self.title)
    }

    /// Apply the changes on top of `note`, keeping id, author and creation time.
    pub fn apply_to(&self, note: &Note) -> Note {
        Note {
            title: self.title.clone(),
            text: self.text.clone(),
            slug: self.resolved_slug(),
            ..note.clone()
        }
    }
}
