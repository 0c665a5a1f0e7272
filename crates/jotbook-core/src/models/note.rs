//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned note identifier.
///
/// Opaque to the client: the editor only ever echoes it back on update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap an identifier received from the backend
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of the user owning a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A titled note owned by a user, as stored by the notes backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(rename = "user")]
    pub owner: UserId,
}

impl Note {
    /// First line of the content, truncated to `max_len` characters
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        self.content
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }
}

/// Request body for create and update calls.
///
/// `id` is only present when updating an existing note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub user: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
}

impl NotePayload {
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn note_uses_backend_field_names() {
        let note: Note = serde_json::from_str(
            r#"{"_id":"n1","title":"A","content":"B","user":"u1","__v":0}"#,
        )
        .unwrap();
        assert_eq!(
            note,
            Note {
                id: NoteId::new("n1"),
                title: "A".to_string(),
                content: "B".to_string(),
                owner: UserId::new("u1"),
            }
        );
    }

    #[test]
    fn create_payload_omits_id() {
        let payload = NotePayload {
            title: "A".to_string(),
            content: "B".to_string(),
            user: UserId::new("u1"),
            id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "A", "content": "B", "user": "u1"})
        );
        assert!(!payload.is_update());
    }

    #[test]
    fn update_payload_carries_id() {
        let payload = NotePayload {
            title: "A".to_string(),
            content: "B".to_string(),
            user: UserId::new("u1"),
            id: Some(NoteId::new("n1")),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], "n1");
        assert!(payload.is_update());
    }

    #[test]
    fn content_preview_takes_first_line() {
        let note = Note {
            id: NoteId::new("n1"),
            title: "Groceries".to_string(),
            content: "Milk and eggs\nBread".to_string(),
            owner: UserId::new("u1"),
        };
        assert_eq!(note.content_preview(50), "Milk and eggs");
        assert_eq!(note.content_preview(4), "Milk");
    }
}
