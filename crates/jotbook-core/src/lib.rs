//! jotbook-core - Core library for Jotbook
//!
//! This crate contains the note models, the create/update editor logic, the
//! collaborator traits it is wired through, and the notes API clients used by
//! the Jotbook interfaces.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod models;
pub mod services;

pub use error::{Error, Result};
pub use models::{Note, NoteId, NotePayload, Session, UserId};
