//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;
use crate::errors::TokenError;

/// Default token lifetime (24 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT issuer
pub const JWT_ISSUER: &str = "sharito";

/// Claims structure for JWT payload
///
/// `sub` carries the decimal user id. It defaults to an empty string when
/// absent so that a signed token without a subject still decodes and is
/// rejected by the identity stage rather than by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as a decimal string)
    #[serde(default)]
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for `subject` valid for `ttl` from `now`
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Remaining lifetime in seconds, zero once expired
    pub fn expires_in(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }

    /// Gets the user ID from the subject claim
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        let subject = self.sub.trim();
        if subject.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        match subject.parse::<UserId>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(TokenError::InvalidSubject {
                subject: self.sub.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_window() {
        let now = Utc::now();
        let claims = Claims::new("42", now, Duration::hours(TOKEN_EXPIRY_HOURS));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.is_expired());
        assert!(claims.expires_in() > 0);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new("7", Utc::now() - Duration::hours(2), Duration::hours(1));
        assert!(claims.is_expired());
        assert_eq!(claims.expires_in(), 0);
    }

    #[test]
    fn test_user_id_from_subject() {
        let now = Utc::now();
        assert_eq!(Claims::new("42", now, Duration::hours(1)).user_id(), Ok(42));
        assert_eq!(
            Claims::new("", now, Duration::hours(1)).user_id(),
            Err(TokenError::MissingSubject)
        );
        for bad in ["abc", "4.2", "-3", "0", "99999999999999999999"] {
            assert!(matches!(
                Claims::new(bad, now, Duration::hours(1)).user_id(),
                Err(TokenError::InvalidSubject { .. })
            ));
        }
    }

    #[test]
    fn test_missing_subject_deserializes_empty() {
        let claims: Claims =
            serde_json::from_str(r#"{"iat":1,"exp":2,"iss":"sharito"}"#).unwrap();
        assert!(claims.sub.is_empty());
    }
}
