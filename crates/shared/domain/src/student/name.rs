//! Student first and last names.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::MAX_PERSON_NAME_LENGTH;
use crate::error::{DomainError, DomainResult};

static PERSON_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("valid person name regex"));

/// Trim, check and title-case a person name part.
fn normalize(value: &str, label: &str) -> DomainResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", label)));
    }

    if trimmed.chars().count() > MAX_PERSON_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            label, MAX_PERSON_NAME_LENGTH
        )));
    }

    if !PERSON_NAME_PATTERN.is_match(trimmed) {
        return Err(DomainError::validation(format!(
            "{} can only contain letters and spaces",
            label
        )));
    }

    Ok(title_case(trimmed))
}

/// Lowercase everything, then uppercase the first letter of every word.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Student first name, stored title-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        normalize(value.as_ref(), "First name").map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Student last name, stored title-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        normalize(value.as_ref(), "Last name").map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
