//! Password hashing with per-user random salts.

mod hasher;

pub use hasher::{CredentialHasher, KdfParams, MIN_SALT_LEN, SALT_LEN};
