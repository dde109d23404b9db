//! # Request errors and how they render
//!
//! | Variant | Response |
//! |---------|----------|
//! | [`AppError::Unauthenticated`] | `302` to the login page with `next` |
//! | [`AppError::NotFound`], `StoreError::NotFound`, `StoreError::Forbidden` | `404` page |
//! | everything else | `500` page, logged at `error` |
//!
//! A note owned by someone else is reported exactly like a missing one.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use store::StoreError;
use thiserror::Error;
use ui::pages;

use crate::auth::{AuthError, UserStoreError};
use crate::redirect;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("login required for {next}")]
    Unauthenticated { next: String },
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Users(#[from] UserStoreError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("session unavailable: {0}")]
    Session(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated { next } => redirect::found(&redirect::login_url(&next)),
            AppError::NotFound | AppError::Store(StoreError::NotFound | StoreError::Forbidden) => {
                (StatusCode::NOT_FOUND, Html(pages::not_found(None))).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::server_error()),
                )
                    .into_response()
            }
        }
    }
}
