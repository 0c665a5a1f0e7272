//! Session model

use super::UserId;

/// The authenticated user as known to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<UserId>,
}

impl Session {
    #[must_use]
    pub fn signed_in(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}
