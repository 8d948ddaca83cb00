//! Registration and login

use std::sync::Arc;

use crate::domain::entities::user::{NewUser, Registration, User};
use crate::domain::value_objects::{AuthResponse, Credential};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::{CredentialHasher, SALT_LEN};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service issuing identity tokens for valid credentials
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password hasher
    hasher: CredentialHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        hasher: CredentialHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            hasher,
            config,
        }
    }

    /// Register a new account and sign the caller in
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token for the new user
    /// * `Err(DomainError::Conflict)` - Login already taken
    /// * `Err(DomainError::Validation)` - Missing login or password
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResponse> {
        Self::require("login", &registration.login)?;
        Self::require("password", &registration.password)?;

        // The unique index still arbitrates concurrent registrations.
        if self
            .user_repository
            .find_by_login(&registration.login)
            .await?
            .is_some()
        {
            tracing::info!(login = %registration.login, "Registration rejected: login taken");
            return Err(DomainError::Conflict {
                message: "login already registered".to_string(),
            });
        }

        let credential = self.hasher.hash_blocking(registration.password).await?;

        let user = self
            .user_repository
            .create(NewUser {
                login: registration.login,
                first_name: registration.first_name,
                last_name: registration.last_name,
                email: registration.email,
                credential,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        self.sign_in(&user)
    }

    /// Verify credentials and issue a token
    ///
    /// Unknown login and wrong password are indistinguishable to the caller:
    /// both run one key derivation and return `Unauthorized`.
    pub async fn login(&self, login: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self.user_repository.find_by_login(login).await?;

        let credential = match &user {
            Some(user) => user.credential.clone(),
            None => Self::placeholder_credential(),
        };

        let matches = self
            .hasher
            .verify_blocking(credential, password.to_string())
            .await?;

        match user {
            Some(user) if matches => {
                tracing::info!(user_id = user.id, "User logged in");
                self.sign_in(&user)
            }
            _ => {
                tracing::info!(login = %login, "Login rejected");
                Err(DomainError::Unauthorized)
            }
        }
    }

    fn sign_in(&self, user: &User) -> DomainResult<AuthResponse> {
        let token = self.token_service.issue(user.id, self.config.token_ttl)?;
        Ok(AuthResponse::new(
            token,
            user.id,
            self.config.token_ttl.num_seconds(),
        ))
    }

    fn placeholder_credential() -> Credential {
        Credential::new(vec![0u8; SALT_LEN], vec![0u8; 64])
    }

    fn require(field: &str, value: &str) -> DomainResult<()> {
        if value.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: field.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
