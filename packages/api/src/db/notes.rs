use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use store::policy::can_access;
use store::{NewNote, Note, NoteChanges, NoteId, NoteStore, StoreError, StoreResult, UserId};
use uuid::Uuid;

use super::is_unique_violation;

const COLUMNS: &str = "id, title, text, slug, author_id, created_at";

#[derive(Debug, FromRow)]
struct NoteRow {
    id: Uuid,
    title: String,
    text: String,
    slug: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            title: row.title,
            text: row.text,
            slug: row.slug,
            author: row.author_id,
            created_at: row.created_at,
        }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn write_error(err: sqlx::Error, slug: &str) -> StoreError {
    if is_unique_violation(&err) {
        StoreError::DuplicateSlug(slug.to_string())
    } else {
        backend(err)
    }
}

/// Notes stored in the `notes` table.
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        let note = note.into_note();
        let row: NoteRow = sqlx::query_as(&format!(
            "INSERT INTO notes ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.text)
        .bind(&note.slug)
        .bind(note.author)
        .bind(note.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &note.slug))?;
        Ok(row.into())
    }

    async fn list_for(&self, author: UserId) -> StoreResult<Vec<Note>> {
        let rows: Vec<NoteRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM notes WHERE author_id = $1 ORDER BY created_at, id"
        ))
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> StoreResult<Note> {
        let row: Option<NoteRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM notes WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        row.map(Note::from).ok_or(StoreError::NotFound)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<NoteId>) -> StoreResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM notes WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)
    }

    async fn update(
        &self,
        note: &Note,
        changes: NoteChanges,
        requester: UserId,
    ) -> StoreResult<Note> {
        if !can_access(requester, note) {
            return Err(StoreError::Forbidden);
        }
        let slug = changes.resolved_slug();
        let row: Option<NoteRow> = sqlx::query_as(&format!(
            "UPDATE notes SET title = $1, text = $2, slug = $3 \
             WHERE id = $4 AND author_id = $5 RETURNING {COLUMNS}"
        ))
        .bind(&changes.title)
        .bind(&changes.text)
        .bind(&slug)
        .bind(note.id)
        .bind(requester)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &slug))?;
        row.map(Note::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, note: &Note, requester: UserId) -> StoreResult<()> {
        if !can_access(requester, note) {
            return Err(StoreError::Forbidden);
        }
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND author_id = $2")
            .bind(note.id)
            .bind(requester)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
