//! Authentication service module
//!
//! - User registration with salted password hashing
//! - Login with constant-time credential verification
//! - Token issuing for authenticated users

mod config;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
