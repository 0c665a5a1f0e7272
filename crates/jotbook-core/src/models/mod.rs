//! Data models for Jotbook

mod note;
mod session;

pub use note::{Note, NoteId, NotePayload, UserId};
pub use session::Session;
