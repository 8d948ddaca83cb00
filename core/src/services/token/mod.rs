//! Token service module for JWT management
//!
//! - HS256 identity token issuing and verification
//! - Signing key loading

mod key_manager;
mod service;


pub use key_manager::{SigningKey, MIN_KEY_LEN};
pub use service::TokenService;
