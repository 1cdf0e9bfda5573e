//! Email value object shared by users and students.

use std::fmt;

use validator::ValidateEmail;

use crate::constants::MAX_EMAIL_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Trimmed, lowercased and format-checked email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim().to_string();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }

        if !trimmed.validate_email() {
            return Err(DomainError::validation("Invalid email format"));
        }

        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
