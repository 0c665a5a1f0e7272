//! Client configuration.
//!
//! Resolved from `JOTBOOK_*` environment variables (the desktop shell loads a
//! `.env` file first). Every value is optional: without an API base URL the
//! client runs against the local in-memory backend, and without a user id
//! there is no session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Session, UserId};
use crate::services::NotificationOptions;

pub const ENV_API_BASE_URL: &str = "JOTBOOK_API_BASE_URL";
pub const ENV_USER_ID: &str = "JOTBOOK_USER_ID";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "JOTBOOK_HTTP_TIMEOUT_SECS";
pub const ENV_TOAST_MS: &str = "JOTBOOK_TOAST_MS";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOAST_MS: u64 = 1000;

/// Runtime client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_toast_ms")]
    pub toast_duration_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            user_id: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = normalize_text_option(lookup(ENV_API_BASE_URL))
            .map(|url| normalize_http_url(&url, ENV_API_BASE_URL))
            .transpose()?;
        let user_id = normalize_text_option(lookup(ENV_USER_ID));
        let http_timeout_secs =
            parse_positive(lookup(ENV_HTTP_TIMEOUT_SECS), ENV_HTTP_TIMEOUT_SECS)?
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        let toast_duration_ms = parse_positive(lookup(ENV_TOAST_MS), ENV_TOAST_MS)?
            .unwrap_or(DEFAULT_TOAST_MS);

        Ok(Self {
            api_base_url,
            user_id,
            http_timeout_secs,
            toast_duration_ms,
        })
    }

    /// True when no remote API is configured.
    pub const fn is_local_only(&self) -> bool {
        self.api_base_url.is_none()
    }

    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Session seeded from the configured user id.
    pub fn session(&self) -> Session {
        Session {
            user_id: normalize_text_option(self.user_id.clone()).map(UserId::new),
        }
    }

    /// Options for success toasts.
    pub fn notification_options(&self) -> NotificationOptions {
        NotificationOptions {
            auto_close: Some(Duration::from_millis(self.toast_duration_ms)),
            ..NotificationOptions::default()
        }
    }
}

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

// ---------------------------------------------------------------------------
// Private
// ---------------------------------------------------------------------------

const fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

const fn default_toast_ms() -> u64 {
    DEFAULT_TOAST_MS
}

fn normalize_http_url(value: &str, field: &str) -> Result<String> {
    if is_http_url(value) {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(Error::Config(format!(
            "{field} must include http:// or https://"
        )))
    }
}

fn parse_positive(raw: Option<String>, field: &str) -> Result<Option<u64>> {
    let Some(raw) = normalize_text_option(raw) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "{field} must be a positive integer, got '{raw}'"
        ))),
        Ok(value) => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_local_only_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.is_local_only());
        assert_eq!(config.session(), Session::anonymous());
    }

    #[test]
    fn values_are_trimmed_and_urls_normalized() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_BASE_URL, " https://notes.example.com/ "),
            (ENV_USER_ID, " u1 "),
            (ENV_HTTP_TIMEOUT_SECS, "3"),
            (ENV_TOAST_MS, "2500"),
        ]))
        .unwrap();

        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://notes.example.com")
        );
        assert_eq!(config.session(), Session::signed_in("u1"));
        assert_eq!(config.http_timeout(), Duration::from_secs(3));
        assert_eq!(
            config.notification_options().auto_close,
            Some(Duration::from_millis(2500))
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_BASE_URL, "   "),
            (ENV_USER_ID, ""),
        ]))
        .unwrap();
        assert!(config.is_local_only());
        assert!(!config.session().is_signed_in());
    }

    #[test]
    fn rejects_url_without_scheme() {
        let error =
            ClientConfig::from_lookup(lookup_from(&[(ENV_API_BASE_URL, "notes.example.com")]))
                .unwrap_err();
        assert!(error.to_string().contains(ENV_API_BASE_URL));
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        assert!(ClientConfig::from_lookup(lookup_from(&[(ENV_HTTP_TIMEOUT_SECS, "0")])).is_err());
        assert!(
            ClientConfig::from_lookup(lookup_from(&[(ENV_HTTP_TIMEOUT_SECS, "soon")])).is_err()
        );
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let error = serde_json::from_str::<ClientConfig>(r#"{"api_base_url": null, "extra": 1}"#)
            .unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }
}
