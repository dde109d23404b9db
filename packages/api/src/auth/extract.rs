//! Axum extractors resolving the session's user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use super::{session, UserStore};
use crate::models::User;
use crate::{AppError, AppState};

/// The logged in user. Anonymous requests are rejected with a redirect to
/// the login page carrying the requested path and query as `next`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match resolve_user(parts, state).await? {
            Some(user) => Ok(Self(user)),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());
                Err(AppError::Unauthenticated { next })
            }
        }
    }
}

/// The logged in user, if any. Never rejects an anonymous request.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<User>);

impl Viewer {
    pub fn username(&self) -> Option<&str> {
        self.0.as_ref().map(|u| u.username.as_str())
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_user(parts, state).await?))
    }
}

async fn resolve_user(parts: &mut Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let session = Session::from_request_parts(parts, state)
        .await
        .map_err(|(_, message)| AppError::Session(message.to_string()))?;
    let Some(id) = session::user_id(&session).await? else {
        return Ok(None);
    };
    // A session pointing at a deleted account counts as anonymous.
    Ok(state.users.find_by_id(id).await?)
}
