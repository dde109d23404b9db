use async_trait::async_trait;
use sqlx::PgPool;
use store::UserId;

use super::is_unique_violation;
use crate::auth::{UserStore, UserStoreError};
use crate::models::User;

fn backend(err: sqlx::Error) -> UserStoreError {
    UserStoreError::Backend(err.to_string())
}

/// Accounts stored in the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let user = User::new(username, password_hash);
        sqlx::query_as(
            "INSERT INTO users (id, username, password_hash, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserStoreError::DuplicateUsername(username.to_string())
            } else {
                backend(e)
            }
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)
    }
}
