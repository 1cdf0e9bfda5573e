//! Course title and description.

use std::fmt;

use crate::constants::{
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_TITLE_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Course title, 2 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let length = value.chars().count();

        if value.is_empty() {
            return Err(DomainError::validation("El título es obligatorio"));
        }

        if length < MIN_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "El título debe tener al menos {} caracteres",
                MIN_TITLE_LENGTH
            )));
        }

        if length > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "El título no puede exceder {} caracteres",
                MAX_TITLE_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Course description, 10 to 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let length = value.chars().count();

        if value.is_empty() {
            return Err(DomainError::validation("La descripción es obligatoria"));
        }

        if length < MIN_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "La descripción debe tener al menos {} caracteres",
                MIN_DESCRIPTION_LENGTH
            )));
        }

        if length > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "La descripción no puede exceder {} caracteres",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
