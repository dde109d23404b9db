//! # Form validation schemas
//!
//! Each write operation validates its submitted fields against a [`Schema`]: a
//! static list of [`FieldRule`]s, one per field, each carrying the [`Rule`]s that
//! apply. Validation yields [`FormErrors`], which the pages render next to the
//! re-displayed form.
//!
//! Checks that need the store (slug uniqueness, unknown usernames) are layered
//! on top by the callers and report into the same [`FormErrors`].
//!
//! [`NOTE_SCHEMA`] covers both note creation and note editing.

use std::collections::BTreeMap;

use crate::models::TITLE_MAX_LEN;
use crate::slug::SLUG_MAX_LEN;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_SLUG: &str =
    "Enter a valid “slug” consisting of letters, numbers, underscores or hyphens.";
pub const INVALID_USERNAME: &str = "Enter a valid username. This value may contain only \
     letters, numbers, and @/./+/-/_ characters.";

/// Suffix of the message shown when a slug is already in use.
pub const DUPLICATE_SLUG_WARNING: &str = " - such slug already exists, choose a unique value!";

/// `"<slug> - such slug already exists, choose a unique value!"`
pub fn duplicate_slug_message(slug: &str) -> String {
    format!("{slug}{DUPLICATE_SLUG_WARNING}")
}

/// A single constraint on a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-blank.
    Required,
    /// At most this many characters.
    MaxLen(usize),
    /// At least this many characters.
    MinLen(usize),
    /// ASCII letters, digits, `-` and `_` only.
    Slug,
    /// Letters, digits and `@ . + - _` only.
    Username,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

/// Validation schema of one form.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    pub fields: &'static [FieldRule],
}

/// Read access to submitted form values by field name.
pub trait FormFields {
    /// The submitted value, or `""` when the field was not sent.
    fn field(&self, name: &str) -> &str;
}

/// Title and text required; slug optional and generated when blank.
pub const NOTE_SCHEMA: Schema = Schema {
    fields: &[
        FieldRule {
            name: "title",
            rules: &[Rule::Required, Rule::MaxLen(TITLE_MAX_LEN)],
        },
        FieldRule {
            name: "text",
            rules: &[Rule::Required],
        },
        FieldRule {
            name: "slug",
            rules: &[Rule::MaxLen(SLUG_MAX_LEN), Rule::Slug],
        },
    ],
};

impl Schema {
    /// Check every field of `form` against its rules.
    ///
    /// Rules other than [`Rule::Required`] are skipped for blank values, and a
    /// field reports at most one message per failing rule.
    pub fn validate(&self, form: &impl FormFields) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in self.fields {
            let value = form.field(field.name).trim();
            if value.is_empty() {
                if field.rules.contains(&Rule::Required) {
                    errors.add(field.name, REQUIRED);
                }
                continue;
            }
            for rule in field.rules {
                if let Some(message) = check(*rule, value) {
                    errors.add(field.name, message);
                }
            }
        }
        errors
    }
}

fn check(rule: Rule, value: &str) -> Option<String> {
    let len = value.chars().count();
    match rule {
        Rule::Required => None,
        Rule::MaxLen(max) if len > max => Some(format!(
            "Ensure this value has at most {max} characters (it has {len})."
        )),
        Rule::MinLen(min) if len < min => Some(format!(
            "This value is too short. It must contain at least {min} characters."
        )),
        Rule::Slug if !is_valid_slug(value) => Some(INVALID_SLUG.to_string()),
        Rule::Username if !is_valid_username(value) => Some(INVALID_USERNAME.to_string()),
        _ => None,
    }
}

/// `true` for non-empty values made of ASCII letters, digits, `-` and `_`.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// `true` for non-empty values made of letters, digits and `@ . + - _`.
pub fn is_valid_username(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '@' | '.' | '+' | '-' | '_'))
}

/// Validation messages keyed by field, plus messages about the form as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    general: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn add_general(&mut self, message: impl Into<String>) {
        self.general.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.fields.values().all(Vec::is_empty)
    }

    /// Messages attached to `field`; empty when it passed.
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages that do not belong to a single field.
    pub fn general(&self) -> &[String] {
        &self.general
    }

    /// Convert into `Err(self)` when anything was reported.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
