use std::sync::Arc;

use store::{MemoryStore, NoteStore};

use crate::auth::{MemoryUserStore, UserStore};

/// Shared handler state: the note and user stores behind trait objects.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(notes: impl NoteStore + 'static, users: impl UserStore + 'static) -> Self {
        Self {
            notes: Arc::new(notes),
            users: Arc::new(users),
        }
    }

    /// Process-local stores, used by tests and demos.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), MemoryUserStore::new())
    }
}
