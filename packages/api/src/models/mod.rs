//! Data models owned by the server.

mod user;

pub use user::User;
