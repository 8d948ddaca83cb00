//! Translation of failures into HTTP responses.
//!
//! Every failure a handler can produce ends up as an [`ApiError`]. The
//! response is chosen from the error's [`ErrorKind`] alone, through
//! [`kind_response`], so no lower-level message ever reaches the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sharito_core::errors::{DomainError, ErrorKind};
use sharito_shared::{error_codes, ErrorResponse};

/// Error type returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A failure reported by the core or persistence layers
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body or query failed declarative validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A handler asked for an identity on a route that is not wrapped by
    /// the authorization middleware
    #[error("Identity missing from request")]
    MissingIdentity,
}

/// Status, client code and client message for each error kind
pub fn kind_response(kind: ErrorKind) -> (StatusCode, &'static str, &'static str) {
    match kind {
        ErrorKind::InvalidInput => (
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_INPUT,
            "Invalid input data",
        ),
        ErrorKind::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Unauthorized",
        ),
        ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            "Resource not found",
        ),
        ErrorKind::Conflict => (
            StatusCode::CONFLICT,
            error_codes::CONFLICT,
            "Resource already exists",
        ),
        ErrorKind::SecurityFault | ErrorKind::DatabaseFault => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred",
        ),
    }
}

impl ApiError {
    /// Build an invalid-input error from a parse failure
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::Domain(DomainError::invalid_input(message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Domain(error) => error.kind(),
            ApiError::Validation(_) => ErrorKind::InvalidInput,
            ApiError::MissingIdentity => ErrorKind::SecurityFault,
        }
    }

    fn log(&self) {
        match self {
            ApiError::MissingIdentity => {
                tracing::error!("Identity requested on a route without authorization middleware");
            }
            ApiError::Domain(error) if error.is_internal() => {
                tracing::error!(error = %error, kind = ?error.kind(), "Request failed");
            }
            ApiError::Domain(error) => {
                tracing::debug!(error = %error, kind = ?error.kind(), "Request rejected");
            }
            ApiError::Validation(errors) => {
                tracing::debug!(error = %errors, "Request failed validation");
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        kind_response(self.kind()).0
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let (status, code, message) = kind_response(self.kind());
        let mut body = ErrorResponse::new(code, message);

        if let ApiError::Validation(errors) = self {
            let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
            body = body.add_detail("fields", fields);
        }

        HttpResponse::build(status).json(body)
    }
}

/// Convenience alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;
