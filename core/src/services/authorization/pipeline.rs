//! Two-stage request authorization

use std::sync::Arc;

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, TokenError};
use crate::services::token::TokenService;

/// Ordered verification chain for protected operations.
///
/// 1. [`verify_stage`](Self::verify_stage): the presented token must exist
///    and pass signature, issuer and expiry checks.
/// 2. [`identity_stage`](Self::identity_stage): the subject claim must be a
///    positive decimal user id.
///
/// A failure at either stage stops the chain with `Unauthorized`. Success
/// yields the [`Identity`] that business services require.
#[derive(Debug, Clone)]
pub struct AuthorizationPipeline {
    tokens: Arc<TokenService>,
}

impl AuthorizationPipeline {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Run both stages in order
    pub fn authorize(&self, bearer: Option<&str>) -> Result<Identity, DomainError> {
        let claims = self.verify_stage(bearer)?;
        self.identity_stage(&claims)
    }

    pub fn verify_stage(&self, bearer: Option<&str>) -> Result<Claims, DomainError> {
        let token = bearer
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::Token(TokenError::MissingToken))?;

        self.tokens.verify(token)
    }

    pub fn identity_stage(&self, claims: &Claims) -> Result<Identity, DomainError> {
        let user_id = claims.user_id().map_err(|cause| {
            tracing::debug!(cause = %cause, "Token subject rejected");
            DomainError::Token(cause)
        })?;

        Ok(Identity::new(user_id))
    }
}
