//! Local-only notes backend kept in process memory.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use super::NoteApi;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NotePayload};

/// In-memory stand-in for the notes backend.
///
/// Used when no API base URL is configured. Assigns UUID v7 ids the way a
/// real backend would assign its own; newest notes are listed first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteApi {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl InMemoryNoteApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteApi for InMemoryNoteApi {
    async fn add_note(&self, payload: &NotePayload) -> Result<Note> {
        let note = Note {
            id: NoteId::new(Uuid::now_v7().to_string()),
            title: payload.title.clone(),
            content: payload.content.clone(),
            owner: payload.user.clone(),
        };
        self.notes.lock().await.insert(0, note.clone());
        Ok(note)
    }

    async fn update_note(&self, payload: &NotePayload) -> Result<Note> {
        let id = payload
            .id
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("update requires a note id".to_string()))?;

        let mut notes = self.notes.lock().await;
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        note.title.clone_from(&payload.title);
        note.content.clone_from(&payload.content);
        note.owner = payload.user.clone();
        Ok(note.clone())
    }

    async fn fetch_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::UserId;

    fn payload(title: &str, id: Option<&NoteId>) -> NotePayload {
        NotePayload {
            title: title.to_string(),
            content: format!("{title} body"),
            user: UserId::new("u1"),
            id: id.cloned(),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn add_assigns_ids_and_lists_newest_first() {
        let api = InMemoryNoteApi::new();
        let first = api.add_note(&payload("first", None)).await.unwrap();
        let second = api.add_note(&payload("second", None)).await.unwrap();
        assert_ne!(first.id, second.id);

        let notes = api.fetch_notes().await.unwrap();
        let titles: Vec<_> = notes.iter().map(|note| note.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn update_replaces_fields_in_place() {
        let api = InMemoryNoteApi::new();
        let created = api.add_note(&payload("draft", None)).await.unwrap();

        let updated = api
            .update_note(&payload("final", Some(&created.id)))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "final");
        assert_eq!(api.fetch_notes().await.unwrap(), vec![updated]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn update_unknown_note_is_not_found() {
        let api = InMemoryNoteApi::new();
        let missing = NoteId::new("missing");
        let error = api
            .update_note(&payload("x", Some(&missing)))
            .await
            .unwrap_err();
        assert!(matches!(error, Error::NotFound(id) if id == "missing"));
    }
}
