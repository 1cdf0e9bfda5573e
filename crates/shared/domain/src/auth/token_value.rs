//! Opaque bearer token value.

use std::fmt;

use rand::{rngs::OsRng, RngCore};

use crate::constants::TOKEN_BYTES;
use crate::error::{DomainError, DomainResult};

/// Secret handed to a client after login.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenValue(String);

// Tokens are credentials; keep them out of logs
impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenValue").field(&"[REDACTED]").finish()
    }
}

impl TokenValue {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("Token value cannot be empty"));
        }

        Ok(Self(value))
    }

    /// Fresh random token: 32 bytes from the OS, hex-encoded.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0_u8; TOKEN_BYTES];

        OsRng.fill_bytes(&mut secret);

        Self(hex::encode(secret))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
