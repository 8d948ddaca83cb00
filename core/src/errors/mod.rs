//! Domain-specific error types and error handling.

mod types;


pub use types::{SecurityError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Security(#[from] SecurityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse classification of a failure, the only part of an error the
/// transport layer is allowed to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Unauthorized,
    SecurityFault,
    DatabaseFault,
    NotFound,
    Conflict,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidInput { .. } => ErrorKind::InvalidInput,
            DomainError::Validation(_) => ErrorKind::InvalidInput,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized => ErrorKind::Unauthorized,
            DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::Database { .. } => ErrorKind::DatabaseFault,
            DomainError::Security(_) => ErrorKind::SecurityFault,
        }
    }

    /// Server-side faults that must be logged with full context
    pub fn is_internal(&self) -> bool {
        matches!(self.kind(), ErrorKind::SecurityFault | ErrorKind::DatabaseFault)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
