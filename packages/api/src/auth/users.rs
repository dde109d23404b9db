//! User persistence seam and its in-memory implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use store::UserId;
use thiserror::Error;

use crate::models::User;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("username `{0}` is already taken")]
    DuplicateUsername(String),
    #[error("user storage failure: {0}")]
    Backend(String),
}

/// Account storage. Usernames are unique and compared exactly.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, username: &str, password_hash: &str)
        -> Result<User, UserStoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> Result<MutexGuard<'_, Vec<User>>, UserStoreError> {
        self.users
            .lock()
            .map_err(|_| UserStoreError::Backend("user store lock poisoned".into()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users()?;
        if users.iter().any(|u| u.username == username) {
            return Err(UserStoreError::DuplicateUsername(username.to_string()));
        }
        let user = User::new(username, password_hash);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users()?.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.users()?.iter().find(|u| u.id == id).cloned())
    }
}
