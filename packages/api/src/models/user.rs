//! # User model for authenticated users
//!
//! [`User`] is the complete row of the `users` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries:
//!
//! - `id` — primary key (`UUID v4`), referenced by `notes.author_id`.
//! - `username` — unique login name, at most 150 characters.
//! - `password_hash` — Argon2id hash in PHC format, never rendered.
//! - `created_at` — audit timestamp.
//!
//! Handlers receive a `User` from the `CurrentUser` extractor and pass it
//! explicitly into every note use-case.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::UserId;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
