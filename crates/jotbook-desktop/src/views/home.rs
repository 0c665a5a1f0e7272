//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NoteList, Toolbar};
use crate::state::{AppState, View};

/// Home view component - toolbar and the note collection
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Toolbar {}
            NoteList {}
        }
    }
}

/// Fallback for paths without a view
#[component]
pub fn NotFound(path: String) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "padding: 32px; display: flex; flex-direction: column; gap: 12px;",
            p { "Nothing here: {path}" }
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state.view.set(View::Home);
                },
                "Back to notes"
            }
        }
    }
}
