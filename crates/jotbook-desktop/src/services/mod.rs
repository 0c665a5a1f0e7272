//! Application services
//!
//! Desktop implementations of the editor's collaborators.

mod navigation;
mod notifier;

pub use navigation::ViewNavigator;
pub use notifier::{toast_styles, ToastNotifier};
