//! Note editor controller
//!
//! Holds the create/update form, validates it, and runs the submit flow
//! against the injected collaborators. The flow is available in one call
//! ([`NoteEditor::submit`]) and as separate steps for UI event loops that
//! cannot keep the editor borrowed across an `.await`:
//!
//! 1. [`NoteEditor::prepare_submit`] validates, checks the session, and
//!    marks the editor as submitting
//! 2. [`Submission::dispatch`] sends the single create/update mutation
//! 3. [`NoteEditor::complete`] records the outcome and notifies the user
//! 4. [`finish`] runs the parent callback, refresh, and navigation

use thiserror::Error;

use crate::api::NoteApi;
use crate::form::{Field, FieldErrors, NoteForm};
use crate::models::{Note, NotePayload};
use crate::services::{Navigator, NotificationOptions, Notifier, SessionProvider, HOME_ROUTE};

pub const NOTE_ADDED: &str = "Note added successfully!";
pub const NOTE_UPDATED: &str = "Note updated successfully!";
pub const SAVE_FAILED: &str = "Failed to save note";
pub const SESSION_MISSING: &str = "User not found. Please log in again.";

/// Where the editor is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Idle,
    Validating,
    /// Stopped locally: invalid fields or no session
    Rejected,
    Submitting,
    Succeeded,
    Navigated,
    /// Mutation failed; the form is kept for a retry
    Failed,
}

/// Why a submit did not produce a saved note
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("User not found. Please log in again.")]
    MissingSession,

    #[error("A save is already in progress")]
    InFlight,

    #[error("Failed to save note: {0}")]
    Mutation(#[source] crate::Error),
}

/// Borrowed collaborators used by [`NoteEditor::submit`].
pub struct EditorServices<'a, A, S, N, V> {
    pub api: &'a A,
    pub session: &'a S,
    pub notifier: &'a N,
    pub navigator: &'a V,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub note: Note,
    /// Collection returned by the post-save refresh, if it succeeded
    pub refreshed: Option<Vec<Note>>,
}

/// A validated request, detached from the editor so it can be awaited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    payload: NotePayload,
}

impl Submission {
    /// Send exactly one mutation: update when the payload names a note,
    /// create otherwise.
    pub async fn dispatch(&self, api: &impl NoteApi) -> crate::Result<Note> {
        if self.payload.is_update() {
            tracing::debug!("Dispatching note update");
            api.update_note(&self.payload).await
        } else {
            tracing::debug!("Dispatching note create");
            api.add_note(&self.payload).await
        }
    }
}

/// Create/update dialog state.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    existing: Option<Note>,
    form: NoteForm,
    errors: FieldErrors,
    phase: EditorPhase,
    success_options: NotificationOptions,
}

impl NoteEditor {
    /// Editor in create mode (`None`) or pre-filled for editing.
    #[must_use]
    pub fn new(existing: Option<Note>) -> Self {
        let mut editor = Self::default();
        editor.sync_existing(existing.as_ref());
        editor
    }

    /// Use these options for the success toast.
    #[must_use]
    pub fn with_notification_options(mut self, options: NotificationOptions) -> Self {
        self.success_options = options;
        self
    }

    /// Track the note being edited.
    ///
    /// When the note differs from the one currently tracked, the fields are
    /// re-initialized from it and stale errors are dropped. Switching to
    /// create mode leaves the fields untouched. Returns whether the fields
    /// were re-initialized.
    pub fn sync_existing(&mut self, existing: Option<&Note>) -> bool {
        if self.existing.as_ref() == existing {
            return false;
        }
        self.existing = existing.cloned();
        let Some(note) = existing else {
            return false;
        };
        tracing::debug!("Pre-filling editor from note {}", note.id);
        self.form = NoteForm::from_note(note);
        self.errors = FieldErrors::default();
        true
    }

    pub const fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    pub const fn form(&self) -> &NoteForm {
        &self.form
    }

    pub const fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub const fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == EditorPhase::Submitting
    }

    pub const fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Update Note"
        } else {
            "Create a Note"
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save Changes"
        } else {
            "Add Note"
        }
    }

    /// Apply a keystroke.
    ///
    /// A field that already shows an error is re-checked on change; a
    /// resting `Rejected`/`Failed` editor returns to `Idle`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        if self.errors.get(field).is_some() {
            let recheck = self.form.validate().err().unwrap_or_default();
            if recheck.get(field).is_none() {
                self.errors.clear_field(field);
            }
        }
        if matches!(self.phase, EditorPhase::Rejected | EditorPhase::Failed) {
            self.phase = EditorPhase::Idle;
        }
    }

    /// Validate and build the request.
    ///
    /// Field errors are kept for inline display. A missing session raises a
    /// blocking alert. On success the editor is marked as submitting until
    /// [`Self::complete`] is called; a second prepare in the meantime is
    /// refused with [`SubmitError::InFlight`].
    pub fn prepare_submit(
        &mut self,
        session: &impl SessionProvider,
        notifier: &impl Notifier,
    ) -> Result<Submission, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a save is in flight");
            return Err(SubmitError::InFlight);
        }

        self.phase = EditorPhase::Validating;
        if let Err(errors) = self.form.validate() {
            self.errors = errors;
            self.phase = EditorPhase::Rejected;
            return Err(SubmitError::Validation(errors));
        }
        self.errors = FieldErrors::default();

        let Some(user) = session.current_user() else {
            tracing::warn!("Submit attempted without a signed-in user");
            notifier.alert(SESSION_MISSING);
            self.phase = EditorPhase::Rejected;
            return Err(SubmitError::MissingSession);
        };

        let target = self.existing.as_ref().map(|note| note.id.clone());
        self.phase = EditorPhase::Submitting;
        Ok(Submission {
            payload: self.form.to_payload(user, target),
        })
    }

    /// Record the settled mutation.
    ///
    /// Success shows the success toast and clears the form; failure shows
    /// the error toast and keeps everything for a retry.
    pub fn complete(
        &mut self,
        result: crate::Result<Note>,
        notifier: &impl Notifier,
    ) -> Result<Note, SubmitError> {
        match result {
            Ok(note) => {
                let message = if self.is_editing() {
                    NOTE_UPDATED
                } else {
                    NOTE_ADDED
                };
                tracing::info!(
                    "{} {}",
                    if self.is_editing() { "Note updated:" } else { "Note added:" },
                    note.id
                );
                notifier.notify_success(message, &self.success_options);
                self.form.clear();
                self.errors = FieldErrors::default();
                self.phase = EditorPhase::Succeeded;
                Ok(note)
            }
            Err(error) => {
                tracing::error!("Error saving note: {}", error);
                notifier.notify_error(SAVE_FAILED);
                self.phase = EditorPhase::Failed;
                Err(SubmitError::Mutation(error))
            }
        }
    }

    /// Mark the post-save navigation as committed.
    ///
    /// Callers that drive [`finish`] themselves call this from the
    /// `on_complete` callback, while the editor is still alive.
    pub fn mark_navigated(&mut self) {
        if self.phase == EditorPhase::Succeeded {
            self.phase = EditorPhase::Navigated;
        }
    }

    /// Run the whole submit flow.
    pub async fn submit<A, S, N, V>(
        &mut self,
        services: &EditorServices<'_, A, S, N, V>,
        on_complete: impl FnOnce(),
    ) -> Result<SubmitOutcome, SubmitError>
    where
        A: NoteApi,
        S: SessionProvider,
        N: Notifier,
        V: Navigator,
    {
        let submission = self.prepare_submit(services.session, services.notifier)?;
        let result = submission.dispatch(services.api).await;
        let note = self.complete(result, services.notifier)?;
        let refreshed = finish(services.api, services.navigator, || {
            self.mark_navigated();
            on_complete();
        })
        .await;
        Ok(SubmitOutcome { note, refreshed })
    }
}

/// Side effects of a successful save, in order: the parent callback, one
/// collection refresh, and navigation to the home view.
///
/// A failed refresh is logged and reported as `None`; the save itself stands.
pub async fn finish(
    api: &impl NoteApi,
    navigator: &impl Navigator,
    on_complete: impl FnOnce(),
) -> Option<Vec<Note>> {
    on_complete();
    let refreshed = match api.fetch_notes().await {
        Ok(notes) => Some(notes),
        Err(error) => {
            tracing::warn!("Failed to refresh notes after save: {}", error);
            None
        }
    };
    navigator.go_to(HOME_ROUTE);
    refreshed
}
