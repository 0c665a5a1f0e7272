//! Note form state and validation

use crate::models::{Note, NoteId, NotePayload, UserId};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";

/// Form fields of the note editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
}

/// Values typed into the editor, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    /// Form pre-filled from an existing note
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Title => self.title = value.into(),
            Field::Content => self.content = value.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// Check both required fields.
    ///
    /// Whitespace-only values count as missing. Values that pass are kept as
    /// typed.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            title: self.title.trim().is_empty().then_some(TITLE_REQUIRED),
            content: self.content.trim().is_empty().then_some(CONTENT_REQUIRED),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the request body for this form.
    #[must_use]
    pub fn to_payload(&self, user: UserId, id: Option<NoteId>) -> NotePayload {
        NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            user,
            id,
        }
    }
}

/// Inline error messages, one slot per field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    #[must_use]
    pub const fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Title => self.title,
            Field::Content => self.content,
        }
    }

    /// Drop the error of a field once the user edits it.
    pub fn clear_field(&mut self, field: Field) {
        match field {
            Field::Title => self.title = None,
            Field::Content => self.content = None,
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.title, self.content].into_iter().flatten().collect();
        f.write_str(&messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(title: &str, content: &str) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn validate_accepts_filled_form() {
        assert_eq!(form("Title", "Body").validate(), Ok(()));
    }

    #[test]
    fn validate_reports_each_missing_field() {
        assert_eq!(
            form("", "").validate(),
            Err(FieldErrors {
                title: Some(TITLE_REQUIRED),
                content: Some(CONTENT_REQUIRED),
            })
        );
        assert_eq!(
            form("Title", "").validate(),
            Err(FieldErrors {
                title: None,
                content: Some(CONTENT_REQUIRED),
            })
        );
    }

    #[test]
    fn validate_treats_whitespace_as_missing() {
        let errors = form("   ", "\n\t").validate().unwrap_err();
        assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(Field::Content), Some(CONTENT_REQUIRED));
    }

    #[test]
    fn payload_keeps_values_as_typed() {
        let payload = form(" Title ", "Body\n").to_payload(UserId::new("u1"), None);
        assert_eq!(payload.title, " Title ");
        assert_eq!(payload.content, "Body\n");
        assert_eq!(payload.user, UserId::new("u1"));
    }

    #[test]
    fn clear_field_error_only_touches_that_field() {
        let mut errors = form("", "").validate().unwrap_err();
        errors.clear_field(Field::Title);
        assert_eq!(errors.title, None);
        assert_eq!(errors.content, Some(CONTENT_REQUIRED));
        assert_eq!(errors.to_string(), CONTENT_REQUIRED);
    }
}
