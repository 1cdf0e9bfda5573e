//! Password value object and the hashing capability behind it.
//!
//! A `Password` is either plain text straight from a request (checked for
//! length) or a stored hash. Hashing itself is delegated to a
//! [`PasswordHasher`] so the entity never depends on a concrete algorithm.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Hash/verify capability for passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Check a plain text password against a stored hash.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2id hasher with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Password value object.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    value: String,
    hashed: bool,
}

// Don't expose the secret in debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .field("hashed", &self.hashed)
            .finish()
    }
}

impl Password {
    /// Plain text password as submitted by a client.
    pub fn new(plain_text: impl Into<String>) -> DomainResult<Self> {
        let value = plain_text.into();

        if value.is_empty() {
            return Err(DomainError::validation("Password cannot be empty"));
        }

        if value.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            value,
            hashed: false,
        })
    }

    /// Password loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> DomainResult<Self> {
        let value = hash.into();

        if value.is_empty() {
            return Err(DomainError::validation("Password cannot be empty"));
        }

        Ok(Self {
            value,
            hashed: true,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_hashed(&self) -> bool {
        self.hashed
    }

    /// Return the hashed form, hashing plain text through `hasher` if needed.
    pub fn hashed_with(&self, hasher: &dyn PasswordHasher) -> DomainResult<Self> {
        if self.hashed {
            return Ok(self.clone());
        }
        Self::from_hash(hasher.hash(&self.value)?)
    }

    /// Check a candidate against this password.
    ///
    /// Hashed passwords go through `hasher`; plain ones compare directly.
    pub fn verify(&self, plain_text: &str, hasher: &dyn PasswordHasher) -> bool {
        if self.hashed {
            hasher.verify(plain_text, &self.value)
        } else {
            self.value == plain_text
        }
    }
}
