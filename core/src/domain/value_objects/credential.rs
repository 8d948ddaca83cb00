//! Stored password credential.

/// Salt and derived hash of a password
///
/// `Debug` prints lengths only.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credential {
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl Credential {
    pub fn new(salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self { salt, hash }
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("salt_len", &self.salt.len())
            .field("hash_len", &self.hash.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_bytes() {
        let credential = Credential::new(vec![0xAB; 64], vec![0xCD; 64]);
        let printed = format!("{:?}", credential);
        assert!(printed.contains("salt_len: 64"));
        assert!(!printed.contains("171"));
    }
}
