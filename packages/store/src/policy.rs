//! Authorization policy for notes.
//!
//! A note is visible to, editable by and deletable by its author only. Callers
//! that fail the check must answer "not found" so that the existence of other
//! users' notes is never revealed.

use crate::models::{Note, UserId};

/// What the requester wants to do with a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

/// `true` when `user` owns `note`. The same rule covers every [`Action`].
pub fn can_access(user: UserId, note: &Note) -> bool {
    note.author == user
}

/// Keep only the notes owned by `user`, preserving order.
pub fn visible_to<'a, I>(user: UserId, notes: I) -> impl Iterator<Item = &'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes.into_iter().filter(move |note| can_access(user, note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewNote;
    use uuid::Uuid;

    #[test]
    fn test_author_can_access() {
        let author = Uuid::new_v4();
        let note = NewNote::new("Заметка", "Текст", author).into_note();
        assert!(can_access(author, &note));
    }

    #[test]
    fn test_other_user_denied() {
        let note = NewNote::new("Заметка", "Текст", Uuid::new_v4()).into_note();
        let stranger = Uuid::new_v4();
        assert!(!can_access(stranger, &note));
    }

    #[test]
    fn test_visible_to_filters_and_keeps_order() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let notes = vec![
            NewNote::new("a1", "", alice).into_note(),
            NewNote::new("b1", "", bob).into_note(),
            NewNote::new("a2", "", alice).into_note(),
        ];
        let titles: Vec<&str> = visible_to(alice, &notes).map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }
}
