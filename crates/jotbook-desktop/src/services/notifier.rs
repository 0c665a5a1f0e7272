//! Toast and alert delivery for the desktop shell.

use dioxus_primitives::toast::{ToastOptions, Toasts};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use jotbook_core::services::{NotificationOptions, Notifier};

/// Notifier backed by dioxus-primitives toasts and native message boxes.
///
/// Per-toast options only carry `auto_close`; placement and click-to-close
/// are stylesheet concerns, see [`toast_styles`].
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Toasts,
}

impl ToastNotifier {
    pub const fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str, options: &NotificationOptions) {
        let toast_options = match options.auto_close {
            Some(duration) => ToastOptions::new().duration(duration),
            None => ToastOptions::new().permanent(true),
        };
        self.toasts.success(message.to_string(), toast_options);
    }

    fn notify_error(&self, message: &str) {
        self.toasts.error(message.to_string(), ToastOptions::new());
    }

    fn alert(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Jotbook")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Toast container styles for `options`: anchored at its position, and with
/// the close button stretched over the whole toast when `close_on_click`.
pub fn toast_styles(options: &NotificationOptions) -> String {
    let mut styles = format!(
        r"
.toast-container {{
    position: fixed;
    {inset}
    z-index: 9999;
    pointer-events: none;
}}
.toast-list {{
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}}
.toast {{
    pointer-events: auto;
    width: 220px;
    border-radius: 8px;
    border: 1px solid #d1d5db;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    padding: 10px 12px;
    color: #000000;
    display: flex;
    gap: 10px;
    align-items: center;
    justify-content: center;
}}
.toast[data-type='success'] {{ border-color: #10b981; }}
.toast[data-type='error'] {{ border-color: #ef4444; }}
.toast-content {{ flex: 1; }}
.toast-title {{ font-size: 1rem; }}
.toast-close {{
    border: 0;
    background: transparent;
    color: #6b7280;
    font-size: 16px;
    line-height: 1;
    padding: 0;
}}
",
        inset = options.position.css_inset()
    );
    if options.close_on_click {
        styles.push_str(CLOSE_ON_CLICK_STYLES);
    }
    styles
}

const CLOSE_ON_CLICK_STYLES: &str = r"
.toast {
    position: relative;
    cursor: pointer;
}
.toast-close::after {
    content: '';
    position: absolute;
    inset: 0;
}
";

#[cfg(test)]
mod tests {
    use jotbook_core::services::ToastPosition;

    use super::*;

    #[test]
    fn toast_styles_anchor_at_requested_corner() {
        let styles = toast_styles(&NotificationOptions::default());
        assert!(styles.contains("bottom: 12px; left: 12px;"));

        let styles = toast_styles(&NotificationOptions {
            position: ToastPosition::TopRight,
            ..NotificationOptions::default()
        });
        assert!(styles.contains("top: 46px; right: 12px;"));
    }

    #[test]
    fn close_on_click_stretches_close_button_over_toast() {
        let styles = toast_styles(&NotificationOptions::default());
        assert!(styles.contains(".toast-close::after"));

        let styles = toast_styles(&NotificationOptions {
            close_on_click: false,
            ..NotificationOptions::default()
        });
        assert!(!styles.contains(".toast-close::after"));
    }
}
