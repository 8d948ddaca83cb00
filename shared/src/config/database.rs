//! Database configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Database configuration for the SQLite store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Deadline for a multi-row transactional write, in seconds
    #[serde(default = "default_write_timeout")]
    pub write_timeout: u64,

    /// Enable SQL statement logging
    #[serde(default)]
    pub enable_logging: bool,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://sharito.db?mode=rwc"),
            max_connections: 10,
            connect_timeout: 30,
            write_timeout: default_write_timeout(),
            enable_logging: false,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("DATABASE_URL").unwrap_or(defaults.url);
        let max_connections = env_parse("DATABASE_MAX_CONNECTIONS", defaults.max_connections);
        let connect_timeout = env_parse("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout);
        let write_timeout = env_parse("DATABASE_WRITE_TIMEOUT", defaults.write_timeout);
        let enable_logging = env_parse("DATABASE_LOG_STATEMENTS", defaults.enable_logging);

        Self {
            url,
            max_connections,
            connect_timeout,
            write_timeout,
            enable_logging,
            ..defaults
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Configuration for a private in-memory database
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:").with_max_connections(1)
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the transactional write deadline in seconds
    pub fn with_write_timeout(mut self, seconds: u64) -> Self {
        self.write_timeout = seconds;
        self
    }

    /// Enable SQL statement logging
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    /// Whether the URL points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn write_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.write_timeout)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_write_timeout() -> u64 {
    10
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}
