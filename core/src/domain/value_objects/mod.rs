//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod credential;
pub mod identity;

pub use auth_response::AuthResponse;
pub use credential::Credential;
pub use identity::Identity;
