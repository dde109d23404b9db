use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use store::FormErrors;
use tower_sessions::Session;
use ui::{pages, urls};

use crate::auth::{self, session, UserStoreError};
use crate::forms::{
    FormKind, LoginForm, SignupForm, DUPLICATE_USERNAME, INVALID_LOGIN, PASSWORD_MISMATCH,
};
use crate::redirect::{found, safe_next};
use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    next: Option<String>,
}

fn non_empty(next: Option<&str>) -> Option<&str> {
    next.filter(|n| !n.is_empty())
}

pub async fn login_form(Query(query): Query<NextQuery>) -> Html<String> {
    Html(pages::login(
        non_empty(query.next.as_deref()),
        "",
        &FormErrors::new(),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let next = non_empty(form.next.as_deref());
    let mut errors = FormKind::Login.schema().validate(&form);
    if errors.is_empty() {
        let username = form.username.trim();
        match auth::authenticate(state.users.as_ref(), username, &form.password).await? {
            Some(user) => {
                session::login(&session, &user).await?;
                tracing::info!(user = %user.username, "logged in");
                return Ok(found(safe_next(next)));
            }
            None => {
                tracing::debug!(user = %form.username, "login rejected");
                errors.add_general(INVALID_LOGIN);
            }
        }
    }
    Ok(Html(pages::login(next, &form.username, &errors)).into_response())
}

pub async fn logout(session: Session) -> Result<Html<String>, AppError> {
    session::logout(&session).await?;
    Ok(Html(pages::logged_out()))
}

pub async fn signup_form() -> Html<String> {
    Html(pages::signup("", &FormErrors::new()))
}

pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let mut errors = FormKind::Signup.schema().validate(&form);
    if errors.field("password2").is_empty() && form.password1 != form.password2 {
        errors.add("password2", PASSWORD_MISMATCH);
    }
    if errors.is_empty() {
        let hash = auth::hash_password(&form.password1)?;
        match state.users.create_user(form.username.trim(), &hash).await {
            Ok(user) => {
                tracing::info!(user = %user.username, "account created");
                return Ok(found(urls::LOGIN));
            }
            Err(UserStoreError::DuplicateUsername(_)) => errors.add("username", DUPLICATE_USERNAME),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(Html(pages::signup(&form.username, &errors)).into_response())
}
