//! Specific error types for token handling, security primitives and input
//! validation.
//!
//! Variants carry the internal cause of a failure. They are meant for
//! server-side logs; the presentation layer only ever sees the coarse
//! [`ErrorKind`](super::ErrorKind) of the wrapping `DomainError`.

use thiserror::Error;

/// Token verification failures
///
/// All of these surface to callers as plain `Unauthorized`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    #[error("Unexpected issuer")]
    InvalidIssuer,

    #[error("Missing subject claim")]
    MissingSubject,

    #[error("Subject is not a valid user id: {subject}")]
    InvalidSubject { subject: String },
}

/// Failures of the security primitives themselves
///
/// These are server faults, never the caller's fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("OS random source unavailable: {message}")]
    RandomSource { message: String },

    #[error("Key derivation failed: {message}")]
    KeyDerivation { message: String },

    #[error("Token signing failed: {message}")]
    TokenSigning { message: String },

    #[error("Signing key could not be loaded: {message}")]
    KeyLoad { message: String },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field}")]
    OutOfRange { field: String },

    #[error("Invalid time range: end must be after start")]
    InvalidTimeRange,
}
