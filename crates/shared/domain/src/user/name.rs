//! Display name of a staff user.

use std::fmt;

use crate::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Trimmed user name, 2 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        let length = trimmed.chars().count();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Name cannot be empty"));
        }

        if length < MIN_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Name must be at least {} characters long",
                MIN_NAME_LENGTH
            )));
        }

        if length > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
