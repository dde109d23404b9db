//! 302 redirects and the login URL.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use ui::urls;

/// `302 Found` pointing at `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// `/auth/login/?next=<path>`, percent-encoded except for `/`.
pub fn login_url(next: &str) -> String {
    format!(
        "{}?next={}",
        urls::LOGIN,
        urlencoding::encode(next).replace("%2F", "/")
    )
}

/// Where to go after logging in. Only same-site absolute paths are honored.
///
/// Browsers read `\` as `/`, so `/\host` is as off-site as `//host`.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if is_local_path(path) => path,
        _ => urls::HOME,
    }
}

fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !path.chars().any(char::is_control)
}
