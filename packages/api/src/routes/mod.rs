//! # HTTP routes
//!
//! | Path | GET | POST |
//! |------|-----|------|
//! | `/` | home | |
//! | `/notes/` | the requester's notes | |
//! | `/add/` | empty note form | create |
//! | `/done/` | success page | |
//! | `/note/{slug}/` | note detail | |
//! | `/edit/{slug}/` | prefilled form | update |
//! | `/delete/{slug}/` | confirmation | delete |
//! | `/auth/login/` | login form | log in, then `302` to `next` |
//! | `/auth/logout/` | log out | log out |
//! | `/auth/signup/` | signup form | create account, then `302` to login |
//!
//! Everything except home and the `/auth/` pages requires a login. Successful
//! writes answer `302 Found` to `/done/`.

mod notes;
mod users;

#[cfg(test)]
mod tests;

use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{http::StatusCode, Router};
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use ui::pages;

use crate::auth::Viewer;
use crate::settings;
use crate::AppState;

/// All routes, without the session layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(notes::home))
        .route("/notes/", get(notes::list))
        .route("/add/", get(notes::add_form).post(notes::add))
        .route("/done/", get(notes::success))
        .route("/note/{slug}/", get(notes::detail))
        .route("/edit/{slug}/", get(notes::edit_form).post(notes::edit))
        .route(
            "/delete/{slug}/",
            get(notes::delete_confirm).post(notes::delete),
        )
        .route("/auth/login/", get(users::login_form).post(users::login))
        .route("/auth/logout/", get(users::logout).post(users::logout))
        .route("/auth/signup/", get(users::signup_form).post(users::signup))
        .fallback(not_found)
        .with_state(state)
}

/// The application with sessions kept in `session_store`.
pub fn app<S>(state: AppState, session_store: S, settings: &settings::Session) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.expiry_days)));
    router(state).layer(session_layer)
}

async fn not_found(viewer: Viewer) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found(viewer.username()))).into_response()
}
