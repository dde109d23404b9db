//! # Database module — PostgreSQL pool, migrations and stores
//!
//! The pool is a **lazy, process-wide singleton** backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_pool`] connects using the [`crate::settings::Database`]
//! section and caches the pool for all subsequent callers.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`get_pool`] | `&'static PgPool`, initialised on first use |
//! | [`migrate`] | Applies `migrations/` (`users`, then `notes`) |
//! | [`PgNoteStore`] | [`store::NoteStore`] over the `notes` table |
//! | [`PgUserStore`] | [`crate::auth::UserStore`] over the `users` table |
//!
//! Slug and username uniqueness are enforced by `UNIQUE` constraints; the
//! stores translate unique violations into their duplicate errors.

mod notes;
mod pool;
mod users;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

pub use notes::PgNoteStore;
pub use pool::get_pool;
pub use users::PgUserStore;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run pending schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
