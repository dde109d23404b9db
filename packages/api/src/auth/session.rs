//! Session keys and the login/logout transitions.

use store::UserId;
use tower_sessions::Session;
use uuid::Uuid;

use super::AuthError;
use crate::models::User;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The user id stored in the session, if any.
///
/// An unparsable value is treated as anonymous.
pub async fn user_id(session: &Session) -> Result<Option<UserId>, AuthError> {
    let raw: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    Ok(raw.and_then(|id| Uuid::parse_str(&id).ok()))
}

/// Bind `user` to the session under a fresh session id.
pub async fn login(session: &Session, user: &User) -> Result<(), AuthError> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await?;
    Ok(())
}

/// Drop every value in the session and delete it from the store.
pub async fn logout(session: &Session) -> Result<(), AuthError> {
    session.flush().await?;
    Ok(())
}
