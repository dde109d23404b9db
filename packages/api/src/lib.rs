//! # API crate — server side of the notes application
//!
//! Everything between the HTTP request and the stores: authentication,
//! form handling, the note use-cases and the axum router.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password hashing, session login/logout, `CurrentUser`/`Viewer` extractors, user store |
//! | [`db`] | PostgreSQL pool (lazy `OnceCell` singleton), migrations, `PgNoteStore`, `PgUserStore` |
//! | [`error`] | [`AppError`] and its mapping to `302`/`404`/`500` responses |
//! | [`forms`] | Submitted form bodies and their validation schemas |
//! | [`models`] | Database models (`User`) |
//! | [`notes`] | Note use-cases, each taking the requesting user explicitly |
//! | [`redirect`] | `302 Found` responses and the login URL with `next` |
//! | [`routes`] | The router: pages, form posts, fallback |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, `YANOTE__*` env) |
//!
//! ## Wiring
//!
//! ```ignore
//! let state = AppState::new(PgNoteStore::new(pool.clone()), PgUserStore::new(pool.clone()));
//! let router = api::app(state, PostgresStore::new(pool.clone()), &settings.session);
//! ```

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod notes;
pub mod redirect;
pub mod routes;
pub mod settings;
mod state;

pub use error::AppError;
pub use routes::{app, router};
pub use settings::Settings;
pub use state::AppState;
