//! Configuration for the authentication service

use chrono::Duration;
use sharito_shared::AuthConfig;

use crate::domain::entities::token::TOKEN_EXPIRY_HOURS;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of tokens issued on register and login
    pub token_ttl: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::hours(TOKEN_EXPIRY_HOURS),
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            token_ttl: config.token_ttl(),
        }
    }
}
