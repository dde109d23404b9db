//! # Note store — persistence contract for notes
//!
//! [`NoteStore`] is the async interface every backend implements. The in-memory
//! [`crate::MemoryStore`] backs tests; the Postgres implementation lives in the
//! `api` crate next to the connection pool.
//!
//! ## Contract
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`create`](NoteStore::create) | Resolves the slug (explicit or generated) and inserts. Fails with [`StoreError::DuplicateSlug`] when any note, of any author, already uses it. |
//! | [`list_for`](NoteStore::list_for) | Notes owned by one user, in insertion order. Never returns other users' notes. |
//! | [`get_by_slug`](NoteStore::get_by_slug) | Exact slug lookup, [`StoreError::NotFound`] when absent. |
//! | [`slug_exists`](NoteStore::slug_exists) | Uniqueness check for form validation, optionally ignoring the note being edited. |
//! | [`update`](NoteStore::update) | Replaces title, text and slug. [`StoreError::Forbidden`] unless the requester is the author. |
//! | [`delete`](NoteStore::delete) | Removes the note. Same ownership rule as `update`. |
//! | [`count`](NoteStore::count) | Number of notes across all authors. |
//!
//! Slug uniqueness must hold under concurrent callers. Backends enforce it where
//! the data lives (a `UNIQUE` constraint, a single lock), never by a separate
//! check-then-insert in the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewNote, Note, NoteChanges, NoteId, UserId};

/// Errors returned by [`NoteStore`] implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("slug `{0}` is already taken")]
    DuplicateSlug(String),
    #[error("note not found")]
    NotFound,
    #[error("note belongs to another author")]
    Forbidden,
    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Async persistence interface for [`Note`] records.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(&self, note: NewNote) -> StoreResult<Note>;

    async fn list_for(&self, author: UserId) -> StoreResult<Vec<Note>>;

    async fn get_by_slug(&self, slug: &str) -> StoreResult<Note>;

    /// `true` when a note other than `exclude` already uses `slug`.
    async fn slug_exists(&self, slug: &str, exclude: Option<NoteId>) -> StoreResult<bool>;

    async fn update(
        &self,
        note: &Note,
        changes: NoteChanges,
        requester: UserId,
    ) -> StoreResult<Note>;

    async fn delete(&self, note: &Note, requester: UserId) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<u64>;
}
