//! Translation of SQLx errors into domain errors.

use sharito_core::errors::DomainError;

/// Map a driver error raised while working on `entity`.
///
/// Constraint violations become caller-facing kinds; everything else is a
/// database fault, logged here with the driver's message.
pub(crate) fn map_sqlx_error(entity: &'static str, error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            tracing::debug!(entity, "Unique constraint violated");
            DomainError::Conflict {
                message: format!("{} already exists", entity),
            }
        }
        sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
            tracing::debug!(entity, "Foreign key constraint violated");
            DomainError::not_found(format!("{} reference", entity))
        }
        sqlx::Error::RowNotFound => DomainError::not_found(entity),
        _ => {
            tracing::error!(entity, error = %error, "Database operation failed");
            DomainError::database(format!("{} query failed: {}", entity, error))
        }
    }
}

/// Column read failure while mapping a row
pub(crate) fn column_error(column: &'static str, error: sqlx::Error) -> DomainError {
    tracing::error!(column, error = %error, "Failed to decode column");
    DomainError::database(format!("Failed to get {}: {}", column, error))
}
