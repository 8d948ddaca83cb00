//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;

/// Result of a successful register or login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed identity token
    pub token: String,

    /// The authenticated user
    pub user_id: UserId,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(token: String, user_id: UserId, expires_in: i64) -> Self {
        Self {
            token,
            user_id,
            expires_in,
        }
    }
}
