//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};

use jotbook_core::api::{NoteApi, NoteBackend};
use jotbook_core::config::ClientConfig;

use crate::components::{NoteEditorDialog, UI_STYLES};
use crate::services::toast_styles;
use crate::state::{AppState, EditorTarget, View};
use crate::views::{Home, NotFound};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let toasts = use_toast();

    let (initial_config, config_error) = use_hook(|| match ClientConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            (ClientConfig::default(), Some(e.to_string()))
        }
    });
    let config = use_signal(|| initial_config);
    let api = use_signal(|| match NoteBackend::from_config(&config.peek()) {
        Ok(backend) => Some(Arc::new(backend)),
        Err(e) => {
            tracing::error!("Failed to create notes API client: {}", e);
            None
        }
    });
    let session = use_signal(|| config.peek().session());
    let mut notes = use_signal(Vec::new);
    let view = use_signal(|| View::Home);
    let editor = use_signal(|| None::<EditorTarget>);

    let mut state = use_context_provider(|| AppState {
        notes,
        session,
        view,
        editor,
        api,
        config,
    });

    // Initial load of the note collection
    use_future(move || {
        let config_error = config_error.clone();
        async move {
            if let Some(message) = config_error {
                toasts.error(
                    "Invalid configuration".to_string(),
                    ToastOptions::new().description(message),
                );
            }

            let Some(api) = api.peek().clone() else {
                toasts.error(
                    "Notes API unavailable".to_string(),
                    ToastOptions::new().description("Check JOTBOOK_API_BASE_URL"),
                );
                return;
            };

            match api.fetch_notes().await {
                Ok(loaded) => {
                    tracing::info!("Loaded {} notes", loaded.len());
                    notes.set(loaded);
                }
                Err(e) => {
                    tracing::error!("Failed to load notes: {}", e);
                    toasts.error(
                        "Failed to load notes".to_string(),
                        ToastOptions::new().description(e.to_string()),
                    );
                }
            }
        }
    });

    let styles = format!(
        "{UI_STYLES}\n{}",
        toast_styles(&config.read().notification_options())
    );

    let dialog = match editor() {
        Some(EditorTarget::Create) => Some(None),
        Some(EditorTarget::Edit(_)) => state.editing_note().map(Some),
        None => None,
    };

    rsx! {
        style { {styles} }

        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: #f9fafb;
                color: #111827;
            ",

            match view() {
                View::Home => rsx! { Home {} },
                View::NotFound(path) => rsx! { NotFound { path } },
            }

            if let Some(existing) = dialog {
                NoteEditorDialog {
                    existing,
                    on_complete: move |()| state.close_editor(),
                    on_cancel: move |()| state.close_editor(),
                }
            }
        }
    }
}
