//! Field and button primitives used by the note editor dialog and the
//! note list.
//!
//! These carry only what those screens need: a single `oninput` handler for
//! the title and content fields, and the `ui-field` classes that
//! [`FieldError`] messages line up under.

use dioxus::prelude::*;

/// Shared styles for button/input/textarea wrappers.
pub const UI_STYLES: &str = r"
.ui-button {
    border-radius: 6px;
    padding: 8px 16px;
    font-size: 14px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
    cursor: default;
}

.ui-button--block {
    width: 100%;
}

.ui-button--primary {
    background: #2563eb;
    color: #ffffff;
    border-color: #2563eb;
}

.ui-button--primary:hover:not(:disabled) {
    background: #1d4ed8;
}

.ui-button--outline {
    background: #ffffff;
    color: #374151;
    border-color: #d1d5db;
}

.ui-button--ghost {
    background: transparent;
    color: #374151;
}

.ui-field {
    width: 100%;
    box-sizing: border-box;
    border: 2px solid #6b7280;
    border-radius: 4px;
    padding: 12px;
    font-size: 14px;
    font-family: inherit;
    background: #ffffff;
    color: #000000;
    outline: none;
}

.ui-field:focus {
    box-shadow: 0 0 0 2px #3b82f6;
}

.ui-field--multiline {
    height: 14rem;
    border-width: 1px;
    resize: vertical;
}

.ui-field-error {
    margin: 4px 0 0 0;
    color: #ef4444;
    font-size: 13px;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-field",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-field ui-field--multiline",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

/// Inline validation message under a form field.
#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "ui-field-error", "{message}" }
        }
    }
}
