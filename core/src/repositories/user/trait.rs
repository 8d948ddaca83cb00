//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its generated id
    /// * `Err(DomainError::Conflict)` - The login is already taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by login name
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError>;
}
