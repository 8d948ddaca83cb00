//! Identity token issuing and verification

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::user::UserId;
use crate::errors::{DomainError, SecurityError, TokenError};

use super::key_manager::SigningKey;

/// Mints and validates HS256 identity tokens.
///
/// The service owns the key material for its whole life. Rotating the key
/// means building a new service; nothing can swap the key in place.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("issuer", &JWT_ISSUER)
            .finish()
    }
}

impl TokenService {
    /// Creates a token service owning `key`
    pub fn new(key: SigningKey) -> Self {
        let encoding_key = EncodingKey::from_secret(key.as_bytes());
        let decoding_key = DecodingKey::from_secret(key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a token for `subject` valid for `ttl`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWS
    /// * `Err(DomainError::InvalidInput)` - `ttl` is not positive
    /// * `Err(DomainError::Security)` - Signing failed
    pub fn issue(&self, subject: UserId, ttl: Duration) -> Result<String, DomainError> {
        if ttl <= Duration::zero() {
            return Err(DomainError::invalid_input("token lifetime must be positive"));
        }

        let claims = Claims::new(subject.to_string(), Utc::now(), ttl);
        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign identity token");
            DomainError::from(SecurityError::TokenSigning {
                message: e.to_string(),
            })
        })
    }

    /// Verify signature, issuer and expiry of `token`
    ///
    /// Every rejection is a `DomainError::Token`, classified as
    /// `Unauthorized`; the variant inside records why for the logs.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| Self::classify(e.kind()))
            .and_then(|claims| {
                if claims.exp <= Utc::now().timestamp() {
                    Err(TokenError::Expired)
                } else {
                    Ok(claims)
                }
            });

        claims.map_err(|cause| {
            tracing::debug!(cause = %cause, "Rejected identity token");
            DomainError::Token(cause)
        })
    }

    /// Verify `token` and return the user id it was issued for
    pub fn verify_subject(&self, token: &str) -> Result<UserId, DomainError> {
        let claims = self.verify(token)?;
        claims.user_id().map_err(DomainError::from)
    }

    fn classify(kind: &JwtErrorKind) -> TokenError {
        match kind {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
            JwtErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
            other => TokenError::Malformed {
                reason: format!("{:?}", other),
            },
        }
    }
}
