//! Profile lookup for the authenticated caller

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Profile of the caller. A valid token for a deleted account is
    /// `NotFound`, not `Unauthorized`.
    pub async fn get_user(&self, identity: &Identity) -> DomainResult<User> {
        self.user_repository
            .find_by_id(identity.user_id())
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
