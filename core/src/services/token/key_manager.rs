//! HMAC signing key loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{DomainError, SecurityError};

/// Shortest accepted HS256 key
pub const MIN_KEY_LEN: usize = 32;

/// Symmetric key used to sign and verify identity tokens
///
/// Built once at startup and moved into a
/// [`TokenService`](super::TokenService); it has no mutators and its bytes
/// are never printed.
pub struct SigningKey {
    bytes: Vec<u8>,
    source: Option<PathBuf>,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("source", &self.source)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SigningKey {
    /// Load the key from a file.
    ///
    /// Trailing ASCII whitespace (such as the newline editors append) is
    /// not part of the key.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read signing key");
            SecurityError::KeyLoad {
                message: format!("failed to read {}: {}", path.display(), e),
            }
        })?;

        let mut key = Self::from_bytes(raw)?;
        key.source = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "Loaded token signing key");
        Ok(key)
    }

    /// Build a key from raw bytes
    pub fn from_bytes(raw: impl Into<Vec<u8>>) -> Result<Self, DomainError> {
        let mut bytes = raw.into();
        while bytes.last().is_some_and(|b| b.is_ascii_whitespace()) {
            bytes.pop();
        }

        if bytes.len() < MIN_KEY_LEN {
            return Err(SecurityError::KeyLoad {
                message: format!("key must be at least {} bytes, got {}", MIN_KEY_LEN, bytes.len()),
            }
            .into());
        }

        Ok(Self {
            bytes,
            source: None,
        })
    }

    pub(super) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
