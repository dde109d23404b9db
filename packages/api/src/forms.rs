//! # Submitted forms
//!
//! Each `application/x-www-form-urlencoded` body deserializes into one of the
//! structs below. Missing fields default to `""` so that validation, not the
//! extractor, reports them. [`FormKind`] names the schema each form is checked
//! against.

use serde::Deserialize;
use store::validation::{FieldRule, Rule, Schema, NOTE_SCHEMA};
use store::{FormFields, NewNote, Note, NoteChanges, UserId};
use ui::NoteDraft;

/// Longest accepted username.
pub const USERNAME_MAX_LEN: usize = 150;
/// Shortest accepted password.
pub const PASSWORD_MIN_LEN: usize = 8;

pub const PASSWORD_MISMATCH: &str = "The two password fields didn’t match.";
pub const DUPLICATE_USERNAME: &str = "A user with that username already exists.";
pub const INVALID_LOGIN: &str = "Please enter a correct username and password.";

pub const SIGNUP_SCHEMA: Schema = Schema {
    fields: &[
        FieldRule {
            name: "username",
            rules: &[Rule::Required, Rule::MaxLen(USERNAME_MAX_LEN), Rule::Username],
        },
        FieldRule {
            name: "password1",
            rules: &[Rule::Required, Rule::MinLen(PASSWORD_MIN_LEN)],
        },
        FieldRule {
            name: "password2",
            rules: &[Rule::Required],
        },
    ],
};

pub const LOGIN_SCHEMA: Schema = Schema {
    fields: &[
        FieldRule {
            name: "username",
            rules: &[Rule::Required],
        },
        FieldRule {
            name: "password",
            rules: &[Rule::Required],
        },
    ],
};

/// The forms the application accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    NoteCreate,
    NoteEdit,
    Signup,
    Login,
}

impl FormKind {
    pub fn schema(self) -> &'static Schema {
        match self {
            FormKind::NoteCreate | FormKind::NoteEdit => &NOTE_SCHEMA,
            FormKind::Signup => &SIGNUP_SCHEMA,
            FormKind::Login => &LOGIN_SCHEMA,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

impl NoteForm {
    /// Prefill for the edit page.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }

    fn explicit_slug(&self) -> Option<String> {
        let slug = self.slug.trim();
        (!slug.is_empty()).then(|| slug.to_string())
    }

    pub fn new_note(&self, author: UserId) -> NewNote {
        NewNote {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            slug: self.explicit_slug(),
            author,
        }
    }

    pub fn changes(&self) -> NoteChanges {
        NoteChanges {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            slug: self.explicit_slug(),
        }
    }

    pub fn into_draft(self) -> NoteDraft {
        NoteDraft {
            title: self.title,
            text: self.text,
            slug: self.slug,
        }
    }
}

impl FormFields for NoteForm {
    fn field(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "text" => &self.text,
            "slug" => &self.slug,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

impl FormFields for SignupForm {
    fn field(&self, name: &str) -> &str {
        match name {
            "username" => &self.username,
            "password1" => &self.password1,
            "password2" => &self.password2,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub next: Option<String>,
}

impl FormFields for LoginForm {
    fn field(&self, name: &str) -> &str {
        match name {
            "username" => &self.username,
            "password" => &self.password,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_blank_slug_means_generated() {
        let form = NoteForm {
            title: " Название заметки ".into(),
            text: "Текст".into(),
            slug: "  ".into(),
        };
        let new = form.new_note(Uuid::new_v4());
        assert_eq!(new.title, "Название заметки");
        assert_eq!(new.slug, None);
        assert_eq!(new.resolved_slug(), "nazvanie-zametki");
        assert_eq!(form.changes().resolved_slug(), "nazvanie-zametki");
    }

    #[test]
    fn test_explicit_slug_is_trimmed() {
        let form = NoteForm {
            title: "t".into(),
            text: "t".into(),
            slug: " my-slug ".into(),
        };
        assert_eq!(form.changes().slug.as_deref(), Some("my-slug"));
    }

    #[test]
    fn test_signup_schema() {
        let short = SignupForm {
            username: "bad name".into(),
            password1: "short".into(),
            password2: String::new(),
        };
        let errors = FormKind::Signup.schema().validate(&short);
        assert_eq!(errors.field("username").len(), 1);
        assert_eq!(
            errors.field("password1"),
            ["This value is too short. It must contain at least 8 characters.".to_string()]
        );
        assert_eq!(errors.field("password2"), ["This field is required.".to_string()]);
    }

    #[test]
    fn test_login_schema_requires_both_fields() {
        let errors = FormKind::Login.schema().validate(&LoginForm::default());
        assert!(!errors.field("username").is_empty());
        assert!(!errors.field("password").is_empty());
        assert!(FormKind::Login
            .schema()
            .validate(&LoginForm {
                username: "u".into(),
                password: "p".into(),
                next: None,
            })
            .is_empty());
    }
}
