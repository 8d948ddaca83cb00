//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Credential;

pub type UserId = i64;

/// User entity as stored
///
/// The credential never leaves the server: it is skipped on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip)]
    pub credential: Credential,
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential: Credential,
}

impl NewUser {
    /// Attach the generated id, producing the stored entity
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            credential: self.credential,
        }
    }
}

/// Registration input before the password is hashed
#[derive(Debug, Clone)]
pub struct Registration {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}
