//! # Infrastructure Layer
//!
//! Concrete persistence for the Sharito backend. The repository traits
//! declared in `sharito_core` are implemented here on top of SQLite through
//! SQLx.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and the SQLite
//!   repositories for users, products and orders
//!
//! Raw driver errors never cross this crate boundary as-is: repositories
//! translate them into `DomainError` after logging the full context, and pool
//! or migration setup failures surface as [`InfrastructureError`].

pub mod database;

pub use database::{
    DatabasePool, PoolStatistics, SqliteOrderRepository, SqliteProductRepository,
    SqliteUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
