use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::models::{NewNote, Note, NoteChanges, NoteId, UserId};
use crate::policy::{can_access, visible_to};
use crate::repo::{NoteStore, StoreError, StoreResult};

/// In-memory NoteStore for testing and local runs without Postgres.
///
/// All notes sit behind one mutex, so the slug check and the insert happen
/// atomically.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn notes(&self) -> StoreResult<MutexGuard<'_, Vec<Note>>> {
        self.notes
            .lock()
            .map_err(|_| StoreError::Backend("note store lock poisoned".to_string()))
    }
}

fn slug_taken(notes: &[Note], slug: &str, exclude: Option<NoteId>) -> bool {
    notes
        .iter()
        .any(|note| note.slug == slug && Some(note.id) != exclude)
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        let note = note.into_note();
        let mut notes = self.notes()?;
        if slug_taken(&notes, &note.slug, None) {
            return Err(StoreError::DuplicateSlug(note.slug));
        }
        notes.push(note.clone());
        Ok(note)
    }

    async fn list_for(&self, author: UserId) -> StoreResult<Vec<Note>> {
        let notes = self.notes()?;
        Ok(visible_to(author, notes.iter()).cloned().collect())
    }

    async fn get_by_slug(&self, slug: &str) -> StoreResult<Note> {
        self.notes()?
            .iter()
            .find(|note| note.slug == slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<NoteId>) -> StoreResult<bool> {
        Ok(slug_taken(&self.notes()?, slug, exclude))
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
        let mut notes = self.notes()?;
        let slug = changes.resolved_slug();
        if slug_taken(&notes, &slug, Some(note.id)) {
            return Err(StoreError::DuplicateSlug(slug));
        }
        let stored = notes
            .iter_mut()
            .find(|stored| stored.id == note.id && stored.author == requester)
            .ok_or(StoreError::NotFound)?;
        *stored = changes.apply_to(stored);
        Ok(stored.clone())
    }

    async fn delete(&self, note: &Note, requester: UserId) -> StoreResult<()> {
        if !can_access(requester, note) {
            return Err(StoreError::Forbidden);
        }
        let mut notes = self.notes()?;
        let before = notes.len();
        notes.retain(|stored| !(stored.id == note.id && stored.author == requester));
        if notes.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.notes()?.len() as u64)
    }
}
