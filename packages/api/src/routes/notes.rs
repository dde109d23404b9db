use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use store::policy::Action;
use store::FormErrors;
use ui::pages::{self, FormMode};
use ui::{urls, NoteDraft};

use crate::auth::{CurrentUser, Viewer};
use crate::forms::NoteForm;
use crate::notes::{self, Submission};
use crate::redirect::found;
use crate::{AppError, AppState};

pub async fn home(viewer: Viewer) -> Html<String> {
    Html(pages::home(viewer.username()))
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    let notes = notes::list_notes(state.notes.as_ref(), &user).await?;
    Ok(Html(pages::note_list(&user.username, notes)))
}

pub async fn success(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(pages::success(&user.username))
}

pub async fn add_form(CurrentUser(user): CurrentUser) -> Html<String> {
    Html(pages::note_form(
        &user.username,
        FormMode::Create,
        NoteDraft::default(),
        &FormErrors::new(),
    ))
}

pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    match notes::create_note(state.notes.as_ref(), &user, &form).await? {
        Submission::Accepted(_) => Ok(found(urls::SUCCESS)),
        Submission::Rejected(errors) => Ok(Html(pages::note_form(
            &user.username,
            FormMode::Create,
            form.into_draft(),
            &errors,
        ))
        .into_response()),
    }
}

pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = notes::note_for(state.notes.as_ref(), &user, &slug, Action::View).await?;
    Ok(Html(pages::note_detail(&user.username, &note)))
}

pub async fn edit_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = notes::note_for(state.notes.as_ref(), &user, &slug, Action::Edit).await?;
    Ok(Html(pages::note_form(
        &user.username,
        FormMode::Edit(&note.slug),
        NoteForm::from_note(&note).into_draft(),
        &FormErrors::new(),
    )))
}

pub async fn edit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    match notes::update_note(state.notes.as_ref(), &user, &slug, &form).await? {
        Submission::Accepted(_) => Ok(found(urls::SUCCESS)),
        Submission::Rejected(errors) => Ok(Html(pages::note_form(
            &user.username,
            FormMode::Edit(&slug),
            form.into_draft(),
            &errors,
        ))
        .into_response()),
    }
}

pub async fn delete_confirm(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = notes::note_for(state.notes.as_ref(), &user, &slug, Action::Delete).await?;
    Ok(Html(pages::note_delete(&user.username, &note)))
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    notes::delete_note(state.notes.as_ref(), &user, &slug).await?;
    Ok(found(urls::SUCCESS))
}
