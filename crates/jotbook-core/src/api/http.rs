//! HTTP client for the notes backend.

use std::time::Duration;

use reqwest::{Response, StatusCode};

use super::NoteApi;
use crate::error::{Error, Result};
use crate::models::{Note, NotePayload};

const NOTES_PATH: &str = "/api/notes";

/// Notes API client talking JSON to a REST backend.
#[derive(Debug, Clone)]
pub struct HttpNoteApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteApi {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{NOTES_PATH}", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}{NOTES_PATH}/{}", self.base_url, urlencoding::encode(id))
    }
}

impl NoteApi for HttpNoteApi {
    async fn add_note(&self, payload: &NotePayload) -> Result<Note> {
        tracing::debug!("POST {}", self.collection_url());
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        parse_json(response, "Create note").await
    }

    async fn update_note(&self, payload: &NotePayload) -> Result<Note> {
        let id = payload
            .id
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("update requires a note id".to_string()))?;
        let url = self.note_url(id.as_str());
        tracing::debug!("PUT {url}");
        let response = self.client.put(url).json(payload).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id.to_string()));
        }
        parse_json(response, "Update note").await
    }

    async fn fetch_notes(&self) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(self.collection_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        parse_json(response, "Fetch notes").await
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response, action: &str) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Api(format_http_failure(action, status, &body)));
    }
    Ok(serde_json::from_str(&body)?)
}

fn format_http_failure(action: &str, status: StatusCode, body: &str) -> String {
    let detail = compact_text(body);
    if detail.is_empty() {
        format!("{action} failed with HTTP {}", status.as_u16())
    } else {
        format!("{action} failed with HTTP {}: {detail}", status.as_u16())
    }
}

/// Truncate text to at most 180 characters for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("notes API base URL is empty".to_string()));
    }
    if !crate::config::is_http_url(trimmed) {
        return Err(Error::Config(format!(
            "notes API base URL must include http:// or https://: {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base: &str) -> HttpNoteApi {
        HttpNoteApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn new_strips_trailing_slash() {
        assert_eq!(client("https://notes.example.com/").base_url(), "https://notes.example.com");
    }

    #[test]
    fn new_rejects_missing_scheme() {
        let error = HttpNoteApi::new("notes.example.com", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn note_urls_are_built_from_base() {
        let api = client("http://localhost:5000");
        assert_eq!(api.collection_url(), "http://localhost:5000/api/notes");
        assert_eq!(
            api.note_url("65f0c2a1"),
            "http://localhost:5000/api/notes/65f0c2a1"
        );
        assert_eq!(
            api.note_url("a b/c"),
            "http://localhost:5000/api/notes/a%20b%2Fc"
        );
    }

    #[test]
    fn http_failure_includes_compacted_body() {
        let message = format_http_failure("Create note", StatusCode::BAD_REQUEST, "  bad title  ");
        assert_eq!(message, "Create note failed with HTTP 400: bad title");

        let message = format_http_failure("Fetch notes", StatusCode::BAD_GATEWAY, "");
        assert_eq!(message, "Fetch notes failed with HTTP 502");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn update_without_id_is_rejected_locally() {
        let api = client("http://127.0.0.1:9");
        let payload = NotePayload {
            title: "A".to_string(),
            content: "B".to_string(),
            user: "u1".into(),
            id: None,
        };
        let error = api.update_note(&payload).await.unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
    }
}
