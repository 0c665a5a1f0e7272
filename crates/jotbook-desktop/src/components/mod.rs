//! UI Components
//!
//! Reusable UI components for the desktop application.

mod note_editor;
mod note_list;
mod toolbar;
mod ui;

pub use note_editor::NoteEditorDialog;
pub use note_list::NoteList;
pub use toolbar::Toolbar;
pub use ui::UI_STYLES;
