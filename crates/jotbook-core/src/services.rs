//! UI-side collaborators of the note editor.
//!
//! Each client (desktop, tests) provides its own implementation: a toast
//! layer for [`Notifier`], a router for [`Navigator`], and whatever holds the
//! signed-in user for [`SessionProvider`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Session, UserId};

/// Route of the application's home view.
pub const HOME_ROUTE: &str = "/";

/// Read-only access to the signed-in user.
pub trait SessionProvider {
    fn current_user(&self) -> Option<UserId>;
}

impl SessionProvider for Session {
    fn current_user(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}

impl SessionProvider for Option<UserId> {
    fn current_user(&self) -> Option<UserId> {
        self.clone()
    }
}

/// Where a toast is anchored on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl ToastPosition {
    /// CSS placement for a fixed-position toast container.
    #[must_use]
    pub const fn css_inset(self) -> &'static str {
        match self {
            Self::TopLeft => "top: 46px; left: 12px;",
            Self::TopRight => "top: 46px; right: 12px;",
            Self::BottomLeft => "bottom: 12px; left: 12px;",
            Self::BottomRight => "bottom: 12px; right: 12px;",
        }
    }
}

/// Presentation options for transient notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub position: ToastPosition,
    /// `None` keeps the toast until dismissed
    pub auto_close: Option<Duration>,
    /// Dismiss when the toast body is clicked, not just its close button
    pub close_on_click: bool,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomLeft,
            auto_close: Some(Duration::from_millis(1000)),
            close_on_click: true,
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier {
    fn notify_success(&self, message: &str, options: &NotificationOptions);

    fn notify_error(&self, message: &str);

    /// Blocking alert; returns once the user has acknowledged it.
    fn alert(&self, message: &str);
}

pub trait Navigator {
    fn go_to(&self, path: &str);
}
