//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use jotbook_core::api::NoteBackend;
use jotbook_core::config::ClientConfig;
use jotbook_core::services::HOME_ROUTE;
use jotbook_core::{Note, NoteId, Session};

/// Top-level screens reachable by path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    NotFound(String),
}

impl View {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed == HOME_ROUTE || trimmed.is_empty() {
            Self::Home
        } else {
            Self::NotFound(trimmed.to_string())
        }
    }
}

/// What the note editor dialog is open for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorTarget {
    Create,
    Edit(NoteId),
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes as last fetched from the backend
    pub notes: Signal<Vec<Note>>,
    /// Signed-in user, if any
    pub session: Signal<Session>,
    /// Current screen
    pub view: Signal<View>,
    /// Open editor dialog, if any
    pub editor: Signal<Option<EditorTarget>>,
    /// Notes backend; `None` when configuration was invalid
    pub api: Signal<Option<Arc<NoteBackend>>>,
    /// Resolved client configuration
    pub config: Signal<ClientConfig>,
}

impl AppState {
    /// Note the editor is editing, if it is open in edit mode and the note
    /// is still in the collection
    #[must_use]
    pub fn editing_note(&self) -> Option<Note> {
        let Some(EditorTarget::Edit(id)) = (self.editor)() else {
            return None;
        };
        self.notes.read().iter().find(|note| note.id == id).cloned()
    }

    pub fn open_editor(&mut self, target: EditorTarget) {
        self.editor.set(Some(target));
    }

    pub fn close_editor(&mut self) {
        self.editor.set(None);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn home_path_maps_to_home_view() {
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path(""), View::Home);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            View::from_path("/archive"),
            View::NotFound("/archive".to_string())
        );
    }
}
