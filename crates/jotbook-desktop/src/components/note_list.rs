//! Note list component

use dioxus::prelude::*;

use super::ui::{ButtonVariant, UiButton};
use crate::state::{AppState, EditorTarget};

/// All notes as cards, each with an edit action
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let notes = (state.notes)();

    rsx! {
        div {
            class: "note-list",
            style: "
                flex: 1;
                overflow-y: auto;
                padding: 16px;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 12px;
                align-content: start;
            ",

            if notes.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: #6b7280;",
                    "No notes yet"
                }
            } else {
                for note in notes {
                    {
                        let note_id = note.id.clone();
                        let preview = note.content_preview(80);

                        rsx! {
                            NoteCard {
                                key: "{note.id}",
                                title: note.title,
                                preview,
                                on_edit: move |_| {
                                    state.open_editor(EditorTarget::Edit(note_id.clone()));
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single note rendered in the note list.
#[component]
fn NoteCard(title: String, preview: String, on_edit: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "note-card",
            style: "
                border: 1px solid #e5e7eb;
                border-radius: 8px;
                padding: 12px 16px;
                background: #ffffff;
                display: flex;
                flex-direction: column;
                gap: 6px;
            ",

            div {
                class: "note-title",
                style: "
                    font-weight: 600;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{title}"
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: #4b5563;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }

            UiButton {
                variant: ButtonVariant::Outline,
                style: "align-self: flex-end; padding: 4px 10px; font-size: 12px;",
                onclick: move |evt| on_edit.call(evt),
                "Edit"
            }
        }
    }
}
