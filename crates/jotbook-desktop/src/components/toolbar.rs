//! Toolbar component with actions

use dioxus::prelude::*;

use super::ui::{ButtonVariant, UiButton};
use crate::state::{AppState, EditorTarget};

/// Toolbar with the new-note action and session status
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let session = (state.session)();
    let local_only = state
        .api
        .read()
        .as_ref()
        .is_some_and(|api| api.is_local());

    let create_note = move |_| {
        state.open_editor(EditorTarget::Create);
    };

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                border-bottom: 1px solid #e5e7eb;
            ",

            UiButton {
                variant: ButtonVariant::Primary,
                onclick: create_note,
                "+ New Note"
            }

            // Spacer
            div { style: "flex: 1;" }

            if local_only {
                span {
                    style: "font-size: 12px; color: #6b7280;",
                    "Local only"
                }
            }

            span {
                style: "font-size: 12px; color: #374151;",
                match session.user_id {
                    Some(user) => rsx! { "Signed in as {user}" },
                    None => rsx! { "Not signed in" },
                }
            }
        }
    }
}
