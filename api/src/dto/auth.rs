use serde::{Deserialize, Serialize};
use validator::Validate;

use sharito_core::domain::entities::user::Registration;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub login: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(required, length(min = 1, max = 128))]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Convert into the service input; call after `validate`
    pub fn into_registration(self) -> Registration {
        Registration {
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub login: String,

    #[validate(required, length(min = 1, max = 128))]
    pub password: Option<String>,
}

/// Body of a successful register or login; the same token is also sent in
/// the `X-Auth` header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: Option<&str>, email: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            login: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: String::new(),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_password_is_required() {
        assert!(register(None, None).validate().is_err());
        assert!(register(Some(""), None).validate().is_err());
        assert!(register(Some("secret"), None).validate().is_ok());
    }

    #[test]
    fn test_email_format_checked_when_present() {
        assert!(register(Some("secret"), Some("not-an-email")).validate().is_err());
        assert!(register(Some("secret"), Some("alice@example.com")).validate().is_ok());
    }

    #[test]
    fn test_login_body_without_password_deserializes_then_fails_validation() {
        let request: LoginRequest = serde_json::from_str(r#"{"login":"alice"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
