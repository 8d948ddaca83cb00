//! Argon2id credential hasher

use argon2::{Algorithm, Argon2, Params, Version};
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::value_objects::Credential;
use crate::errors::{DomainError, SecurityError};

/// Salt length drawn for every new credential
pub const SALT_LEN: usize = 64;

/// Shortest salt the hasher accepts
pub const MIN_SALT_LEN: usize = 32;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of passes
    pub time_cost: u32,
    /// Memory in KiB
    pub memory_kib: u32,
    pub parallelism: u32,
    /// Derived hash length in bytes
    pub output_len: usize,
}

impl KdfParams {
    /// Parameters every stored credential is derived with
    pub const SYSTEM: KdfParams = KdfParams {
        time_cost: 1,
        memory_kib: 64 * 1024,
        parallelism: 4,
        output_len: 64,
    };
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::SYSTEM
    }
}

/// Derives and verifies salted password hashes.
///
/// Derivation is deliberately expensive. Async callers should run it via
/// `tokio::task::spawn_blocking`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher {
    params: KdfParams,
}

impl CredentialHasher {
    /// Hasher using [`KdfParams::SYSTEM`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with custom parameters. Credentials produced with other
    /// parameters do not verify against the system hasher.
    pub fn with_params(params: KdfParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> KdfParams {
        self.params
    }

    /// Hash `password` under a fresh salt from the OS random source.
    pub fn hash(&self, password: &str) -> Result<Credential, DomainError> {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.try_fill_bytes(&mut salt).map_err(|e| {
            tracing::error!(error = %e, "OS random source failed while generating salt");
            SecurityError::RandomSource {
                message: e.to_string(),
            }
        })?;

        let hash = self.derive(password, &salt).map_err(|e| {
            tracing::error!(error = %e, "Password key derivation failed");
            e
        })?;

        Ok(Credential::new(salt, hash))
    }

    /// Check `password` against a stored salt and hash.
    ///
    /// The comparison is constant-time. A derivation failure counts as a
    /// mismatch.
    pub fn verify(&self, salt: &[u8], stored_hash: &[u8], password: &str) -> bool {
        match self.derive(password, salt) {
            Ok(candidate) => constant_time_eq(&candidate, stored_hash),
            Err(e) => {
                tracing::warn!(error = %e, "Key derivation failed during verification");
                false
            }
        }
    }

    pub fn verify_credential(&self, credential: &Credential, password: &str) -> bool {
        self.verify(credential.salt(), credential.hash(), password)
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, password: String) -> Result<Credential, DomainError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(Self::join_error)?
    }

    /// [`verify_credential`](Self::verify_credential) on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        credential: Credential,
        password: String,
    ) -> Result<bool, DomainError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify_credential(&credential, &password))
            .await
            .map_err(Self::join_error)
    }

    fn join_error(e: tokio::task::JoinError) -> DomainError {
        tracing::error!(error = %e, "Key derivation task did not complete");
        SecurityError::KeyDerivation {
            message: e.to_string(),
        }
        .into()
    }

    fn derive(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, SecurityError> {
        if salt.len() < MIN_SALT_LEN {
            return Err(SecurityError::KeyDerivation {
                message: format!("salt shorter than {} bytes", MIN_SALT_LEN),
            });
        }

        let params = Params::new(
            self.params.memory_kib,
            self.params.time_cost,
            self.params.parallelism,
            Some(self.params.output_len),
        )
        .map_err(|e| SecurityError::KeyDerivation {
            message: e.to_string(),
        })?;

        let mut output = vec![0u8; self.params.output_len];
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password_into(password.as_bytes(), salt, &mut output)
            .map_err(|e| SecurityError::KeyDerivation {
                message: e.to_string(),
            })?;

        Ok(output)
    }
}
