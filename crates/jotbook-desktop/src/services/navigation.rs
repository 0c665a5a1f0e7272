//! Path-based navigation between top-level views.

use dioxus::prelude::*;

use jotbook_core::services::Navigator;

use crate::state::View;

/// Navigator that switches the app's current [`View`].
#[derive(Clone, Copy)]
pub struct ViewNavigator {
    view: Signal<View>,
}

impl ViewNavigator {
    pub const fn new(view: Signal<View>) -> Self {
        Self { view }
    }
}

impl Navigator for ViewNavigator {
    fn go_to(&self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        let mut view = self.view;
        view.set(View::from_path(path));
    }
}
