//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigError, Environment};

const SIGNING_KEY_VARIABLE: &str = "JWT_SIGNING_KEY_PATH";

/// JWT issuing configuration
///
/// Only the location of the signing key is configured here; the key bytes
/// themselves are loaded once at startup by the token service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Path to the HMAC signing key file
    pub signing_key_path: PathBuf,

    /// Token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_key_path: PathBuf::from("keys/jwt_signing.key"),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Outside production a missing `JWT_SIGNING_KEY_PATH` falls back to
    /// `keys/jwt_signing.key`; in production it is an error.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let signing_key_path = std::env::var(SIGNING_KEY_VARIABLE)
            .or_else(|_| std::env::var("JWT_PRIVATE_KEY"))
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let token_ttl_hours = std::env::var("JWT_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self::from_parts(environment, signing_key_path, token_ttl_hours)
    }

    /// Build from already-read values, applying the per-environment rules
    pub fn from_parts(
        environment: Environment,
        signing_key_path: Option<PathBuf>,
        token_ttl_hours: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let signing_key_path = match signing_key_path {
            Some(path) => path,
            None if environment.is_production() => {
                return Err(ConfigError::MissingVariable {
                    variable: SIGNING_KEY_VARIABLE,
                    environment,
                })
            }
            None => defaults.signing_key_path,
        };

        Ok(Self {
            signing_key_path,
            token_ttl_hours: token_ttl_hours
                .filter(|hours| *hours > 0)
                .unwrap_or(defaults.token_ttl_hours),
        })
    }

    /// Create a configuration pointing at a specific key file
    pub fn new(signing_key_path: impl Into<PathBuf>) -> Self {
        Self {
            signing_key_path: signing_key_path.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in hours
    pub fn with_token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    /// Token lifetime as a chrono duration
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours)
    }
}

fn default_token_ttl_hours() -> i64 {
    24
}
