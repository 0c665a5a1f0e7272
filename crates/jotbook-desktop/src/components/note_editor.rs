//! Create/update note dialog

use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use jotbook_core::editor::{finish, NoteEditor};
use jotbook_core::form::Field;
use jotbook_core::Note;

use super::ui::{ButtonVariant, FieldError, UiButton, UiInput, UiTextarea};
use crate::services::{ToastNotifier, ViewNavigator};
use crate::state::AppState;

/// Modal editor for a new note (`existing: None`) or an existing one.
///
/// `on_complete` fires once the note is saved; `on_cancel` when the user
/// dismisses the dialog.
#[component]
pub fn NoteEditorDialog(
    existing: Option<Note>,
    on_complete: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut state = use_context::<AppState>();
    let toasts = use_toast();
    let notification_options = state.config.read().notification_options();

    let initial = existing.clone();
    let mut editor = use_signal(move || {
        NoteEditor::new(initial).with_notification_options(notification_options)
    });

    // Re-initialize the fields when the edited note changes underneath us.
    use_effect(use_reactive((&existing,), move |(existing,)| {
        editor.write().sync_existing(existing.as_ref());
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let notifier = ToastNotifier::new(toasts);
        let session = state.session.read().clone();

        let Ok(submission) = editor.write().prepare_submit(&session, &notifier) else {
            return;
        };
        let Some(api) = state.api.read().clone() else {
            let unavailable = jotbook_core::Error::Config("notes API is unavailable".to_string());
            let _ = editor.write().complete(Err(unavailable), &notifier);
            return;
        };

        // Runs past this dialog's unmount: `on_complete` closes it before the
        // refresh and navigation happen.
        spawn_forever(async move {
            let result = submission.dispatch(&api).await;
            if editor.write().complete(result, &notifier).is_err() {
                return;
            }
            let navigator = ViewNavigator::new(state.view);
            // `on_complete` unmounts this dialog, so settle the phase first.
            let close = move || {
                editor.write().mark_navigated();
                on_complete.call(());
            };
            if let Some(notes) = finish(&api, &navigator, close).await {
                state.notes.set(notes);
            }
        });
    };

    let current = editor.read().clone();
    let errors = current.errors();
    let submitting = current.is_submitting();
    let title = current.form().title.clone();
    let content = current.form().content.clone();
    let heading = current.heading();
    let submit_label = current.submit_label();

    rsx! {
        div {
            class: "dialog-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.3);
                z-index: 2000;
            ",
            onclick: move |_| {
                if !submitting {
                    on_cancel.call(());
                }
            },

            div {
                class: "dialog-content",
                role: "dialog",
                style: "
                    width: 91%;
                    max-width: 720px;
                    height: 90vh;
                    box-sizing: border-box;
                    overflow-y: auto;
                    border-radius: 4px;
                    padding: 16px 24px;
                    background: #ffffff;
                    color: #000000;
                ",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h2 {
                    style: "margin: 0 0 16px 0; font-size: 1.5rem; text-align: center;",
                    "{heading}"
                }

                form {
                    onsubmit: on_submit,

                    div {
                        style: "margin-bottom: 24px;",
                        label {
                            r#for: "title",
                            style: "display: block; margin-bottom: 8px; font-weight: 700;",
                            "Title:"
                        }
                        UiInput {
                            id: "title",
                            r#type: "text",
                            placeholder: "Give a title to your note",
                            value: "{title}",
                            oninput: move |evt: FormEvent| {
                                editor.write().set_field(Field::Title, evt.value());
                            },
                        }
                        FieldError { message: errors.get(Field::Title) }
                    }

                    div {
                        style: "margin-bottom: 24px;",
                        label {
                            r#for: "content",
                            style: "display: block; margin-bottom: 8px; font-weight: 700;",
                            "Content:"
                        }
                        UiTextarea {
                            id: "content",
                            placeholder: "Write your note here",
                            value: "{content}",
                            oninput: move |evt: FormEvent| {
                                editor.write().set_field(Field::Content, evt.value());
                            },
                        }
                        FieldError { message: errors.get(Field::Content) }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 8px;",
                        UiButton {
                            r#type: "submit",
                            block: true,
                            disabled: submitting,
                            if submitting { "Saving..." } else { "{submit_label}" }
                        }
                        UiButton {
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            block: true,
                            disabled: submitting,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
