//! Business services containing domain logic and use cases.

pub mod auth;
pub mod authorization;
pub mod password;
pub mod product;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use authorization::AuthorizationPipeline;
pub use password::{CredentialHasher, KdfParams};
pub use product::{ProductService, ProductServiceConfig};
pub use token::{SigningKey, TokenService};
pub use user::UserService;
