//! Database module - SQLite implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and migrations
//! - Repository implementations
//! - Translation of driver errors into domain errors

pub mod connection;
pub mod sqlite;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sqlite::{SqliteOrderRepository, SqliteProductRepository, SqliteUserRepository};
