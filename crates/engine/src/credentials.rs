//! Password hashing behind the [`CredentialHasher`] seam.
//!
//! The engine only ever stores and compares hashes produced here. The default
//! implementation emits Argon2id PHC strings, so the parameters and salt travel
//! with each stored hash.

use std::fmt::Debug;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::Rng;

use crate::{EngineError, ResultEngine};

/// Hash and verify user credentials.
pub trait CredentialHasher: Debug + Send + Sync {
    /// Produce the string persisted in `users.password`.
    fn hash(&self, secret: &str) -> ResultEngine<String>;

    /// Check `secret` against a value previously returned by [`Self::hash`].
    ///
    /// Malformed stored hashes verify as `false`.
    fn verify(&self, secret: &str, stored: &str) -> bool;
}

/// Argon2id hasher.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    /// Build a hasher with explicit cost parameters.
    ///
    /// `memory_kib` must be at least `8 * parallelism`.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> ResultEngine<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|err| EngineError::Credentials(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> ResultEngine<String> {
        let salt_bytes: [u8; 16] = rand::thread_rng().r#gen();
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| EngineError::Credentials(err.to_string()))?;
        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|err| EngineError::Credentials(err.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, secret: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            tracing::warn!("stored credential is not a valid PHC string");
            return false;
        };
        self.argon2()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}
