//! # Authentication — local accounts, sessions and request extractors
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`hash_password`], [`verify_password`] | Argon2id PHC hashing |
//! | [`session`] | `user_id` session key, login and logout transitions |
//! | [`UserStore`] | Account persistence seam, [`MemoryUserStore`] for tests |
//! | [`CurrentUser`] | Extractor that requires a login, redirecting to the login page otherwise |
//! | [`Viewer`] | Extractor that resolves the user if there is one |

mod extract;
mod password;
pub mod session;
mod users;

use thiserror::Error;

pub use extract::{CurrentUser, Viewer};
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
pub use users::{MemoryUserStore, UserStore, UserStoreError};

use crate::models::User;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("invalid password hash: {0}")]
    InvalidHash(String),
    #[error("session store failure: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Look up `username` and check `password` against its stored hash.
///
/// `Ok(None)` covers both an unknown user and a wrong password.
pub async fn authenticate(
    users: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<Option<User>, crate::AppError> {
    let Some(user) = users.find_by_username(username).await? else {
        return Ok(None);
    };
    if verify_password(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
