//! Notes mutation API

mod http;
mod memory;

pub use http::HttpNoteApi;
pub use memory::InMemoryNoteApi;

use crate::error::Result;
use crate::models::{Note, NotePayload};

/// Remote operations on the note collection (async)
#[allow(async_fn_in_trait)]
pub trait NoteApi {
    /// Create a note; the backend assigns its id
    async fn add_note(&self, payload: &NotePayload) -> Result<Note>;

    /// Update the note named by `payload.id`
    async fn update_note(&self, payload: &NotePayload) -> Result<Note>;

    /// Fetch the whole collection
    async fn fetch_notes(&self) -> Result<Vec<Note>>;
}

impl<T: NoteApi> NoteApi for std::sync::Arc<T> {
    async fn add_note(&self, payload: &NotePayload) -> Result<Note> {
        (**self).add_note(payload).await
    }

    async fn update_note(&self, payload: &NotePayload) -> Result<Note> {
        (**self).update_note(payload).await
    }

    async fn fetch_notes(&self) -> Result<Vec<Note>> {
        (**self).fetch_notes().await
    }
}

/// The backend a client talks to, chosen from configuration.
#[derive(Debug, Clone)]
pub enum NoteBackend {
    Http(HttpNoteApi),
    Local(InMemoryNoteApi),
}

impl NoteBackend {
    /// Build the HTTP client when an API base URL is configured, otherwise
    /// fall back to the local in-memory backend.
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self> {
        match config.api_base_url.as_deref() {
            Some(base_url) => {
                tracing::info!("Using notes API at {}", base_url);
                Ok(Self::Http(HttpNoteApi::new(base_url, config.http_timeout())?))
            }
            None => {
                tracing::info!("Running in local-only mode (no notes API configured)");
                Ok(Self::Local(InMemoryNoteApi::new()))
            }
        }
    }

    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl NoteApi for NoteBackend {
    async fn add_note(&self, payload: &NotePayload) -> Result<Note> {
        match self {
            Self::Http(api) => api.add_note(payload).await,
            Self::Local(api) => api.add_note(payload).await,
        }
    }

    async fn update_note(&self, payload: &NotePayload) -> Result<Note> {
        match self {
            Self::Http(api) => api.update_note(payload).await,
            Self::Local(api) => api.update_note(payload).await,
        }
    }

    async fn fetch_notes(&self) -> Result<Vec<Note>> {
        match self {
            Self::Http(api) => api.fetch_notes().await,
            Self::Local(api) => api.fetch_notes().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn backend_without_base_url_is_local() {
        let backend = NoteBackend::from_config(&ClientConfig::default()).unwrap();
        assert!(backend.is_local());
    }

    #[test]
    fn backend_with_base_url_is_http() {
        let config = ClientConfig {
            api_base_url: Some("http://localhost:5000".to_string()),
            ..ClientConfig::default()
        };
        match NoteBackend::from_config(&config).unwrap() {
            NoteBackend::Http(api) => assert_eq!(api.base_url(), "http://localhost:5000"),
            NoteBackend::Local(_) => panic!("expected HTTP backend"),
        }
    }
}
