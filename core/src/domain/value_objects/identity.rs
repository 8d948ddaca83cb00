//! Authenticated caller identity.

use crate::domain::entities::UserId;

/// The user on whose behalf a request runs
///
/// Only the authorization pipeline in this crate can construct one, so a
/// business operation that takes `&Identity` cannot be reached without a
/// verified token. Lives for a single request and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
}

impl Identity {
    pub(crate) fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
