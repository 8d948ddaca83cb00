//! Configuration for the product service

use std::time::Duration;

use sharito_shared::types::DEFAULT_PER_PAGE;
use sharito_shared::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    /// Deadline for the product aggregate write
    pub write_timeout: Duration,
    /// Products per listing page
    pub per_page: u32,
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            write_timeout: Duration::from_secs(10),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl From<&DatabaseConfig> for ProductServiceConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            write_timeout: config.write_timeout_duration(),
            ..Self::default()
        }
    }
}
