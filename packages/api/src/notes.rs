//! # Note use-cases
//!
//! Every operation takes the requesting [`User`] explicitly. A note that is
//! missing or owned by someone else surfaces as [`AppError::NotFound`], so
//! handlers answer `404` in both cases.
//!
//! Writes return a [`Submission`]: either the stored note or the form errors to
//! re-render. Slug uniqueness is checked before writing and again by the store
//! itself, which closes the race between two concurrent submissions.

use store::policy::{can_access, Action};
use store::validation::duplicate_slug_message;
use store::{FormErrors, Note, NoteStore, StoreError};

use crate::forms::{FormKind, NoteForm};
use crate::models::User;
use crate::AppError;

/// Shown when the title transliterates to nothing and no slug was given.
pub const EMPTY_SLUG: &str = "Could not build a slug from the title, please enter one.";

#[derive(Debug)]
pub enum Submission {
    Accepted(Note),
    Rejected(FormErrors),
}

/// The requester's notes in creation order.
pub async fn list_notes(store: &dyn NoteStore, user: &User) -> Result<Vec<Note>, AppError> {
    Ok(store.list_for(user.id).await?)
}

/// The note under `slug`, provided `user` may perform `action` on it.
pub async fn note_for(
    store: &dyn NoteStore,
    user: &User,
    slug: &str,
    action: Action,
) -> Result<Note, AppError> {
    let note = match store.get_by_slug(slug).await {
        Ok(note) => note,
        Err(StoreError::NotFound) => return Err(AppError::NotFound),
        Err(e) => return Err(e.into()),
    };
    if !can_access(user.id, &note) {
        tracing::debug!(
            slug,
            user = %user.username,
            action = action.as_str(),
            "note hidden from non-author"
        );
        return Err(AppError::NotFound);
    }
    Ok(note)
}

pub async fn create_note(
    store: &dyn NoteStore,
    user: &User,
    form: &NoteForm,
) -> Result<Submission, AppError> {
    let mut errors = FormKind::NoteCreate.schema().validate(form);
    if !errors.is_empty() {
        return Ok(Submission::Rejected(errors));
    }
    let new = form.new_note(user.id);
    let slug = new.resolved_slug();
    if let Some(message) = slug_problem(store, &slug, None).await? {
        errors.add("slug", message);
        return Ok(Submission::Rejected(errors));
    }
    match store.create(new).await {
        Ok(note) => {
            tracing::info!(slug = %note.slug, user = %user.username, "note created");
            Ok(Submission::Accepted(note))
        }
        Err(StoreError::DuplicateSlug(slug)) => {
            errors.add("slug", duplicate_slug_message(&slug));
            Ok(Submission::Rejected(errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// Replace title, text and slug of the note currently stored under `slug`.
pub async fn update_note(
    store: &dyn NoteStore,
    user: &User,
    slug: &str,
    form: &NoteForm,
) -> Result<Submission, AppError> {
    let note = note_for(store, user, slug, Action::Edit).await?;
    let mut errors = FormKind::NoteEdit.schema().validate(form);
    if !errors.is_empty() {
        return Ok(Submission::Rejected(errors));
    }
    let changes = form.changes();
    let new_slug = changes.resolved_slug();
    if let Some(message) = slug_problem(store, &new_slug, Some(&note)).await? {
        errors.add("slug", message);
        return Ok(Submission::Rejected(errors));
    }
    match store.update(&note, changes, user.id).await {
        Ok(updated) => {
            tracing::info!(slug = %updated.slug, user = %user.username, "note updated");
            Ok(Submission::Accepted(updated))
        }
        Err(StoreError::DuplicateSlug(slug)) => {
            errors.add("slug", duplicate_slug_message(&slug));
            Ok(Submission::Rejected(errors))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_note(store: &dyn NoteStore, user: &User, slug: &str) -> Result<(), AppError> {
    let note = note_for(store, user, slug, Action::Delete).await?;
    store.delete(&note, user.id).await?;
    tracing::info!(slug, user = %user.username, "note deleted");
    Ok(())
}

async fn slug_problem(
    store: &dyn NoteStore,
    slug: &str,
    current: Option<&Note>,
) -> Result<Option<String>, AppError> {
    if slug.is_empty() {
        return Ok(Some(EMPTY_SLUG.to_string()));
    }
    if store.slug_exists(slug, current.map(|n| n.id)).await? {
        return Ok(Some(duplicate_slug_message(slug)));
    }
    Ok(None)
}
