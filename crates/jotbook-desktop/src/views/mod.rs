//! Top-level views

mod home;

pub use home::{Home, NotFound};
