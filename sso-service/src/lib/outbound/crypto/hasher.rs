use crate::domain::auth::errors::PasswordError;
use crate::domain::auth::ports::CredentialHasher;

/// Argon2id hasher from the `auth` library.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    inner: auth::PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            inner: auth::PasswordHasher::new(),
        }
    }

    /// Hasher with a reduced work factor, for tests.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        auth::PasswordHasher::with_params(memory_kib, iterations, parallelism)
            .map(|inner| Self { inner })
            .map_err(into_domain)
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        self.inner.hash(password).map_err(into_domain)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        self.inner.verify(password, hash).map_err(into_domain)
    }
}

fn into_domain(err: auth::PasswordError) -> PasswordError {
    match err {
        auth::PasswordError::HashingFailed(msg) | auth::PasswordError::InvalidParams(msg) => {
            PasswordError::HashingFailed(msg)
        }
        auth::PasswordError::VerificationFailed(msg) => PasswordError::VerificationFailed(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_only_original_password() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hasher.verify("correct horse", &hash).unwrap());
        assert!(!hasher.verify("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = Argon2CredentialHasher::new();

        let result = hasher.verify("password", "plaintext-not-a-hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
