//! Hashing of new password material.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher as ArgonHasher, SaltString, rand_core::OsRng},
};

use midgard_core::config::{AuthConfig, HashAlgorithm};
use midgard_core::error::AppError;

/// Produces salted adaptive hashes for newly set passwords.
///
/// Both bcrypt and Argon2id output is accepted by
/// [`verify_password`](super::verify_password), whichever is configured.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    algorithm: HashAlgorithm,
    bcrypt_cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            algorithm: config.hash_algorithm,
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// The configured hash family.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        match self.algorithm {
            HashAlgorithm::Bcrypt => bcrypt::hash(password, self.bcrypt_cost)
                .map_err(|e| AppError::internal(format!("Password hashing failed: {e}"))),
            HashAlgorithm::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
