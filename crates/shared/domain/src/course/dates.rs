//! Course start and end dates.
//!
//! Both accept a calendar date (`2025-03-01`) or a timestamp whose date part
//! is used. Dates coming back from storage skip the "not before today" rule
//! through `restore`, so finished courses remain readable.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// First day of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartDate {
    value: String,
    date: NaiveDate,
}

impl StartDate {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("La fecha de inicio es obligatoria"));
        }

        let date = parse_calendar_date(&value).ok_or_else(|| {
            DomainError::validation("El formato de fecha de inicio no es válido")
        })?;

        if date < today() {
            return Err(DomainError::validation(
                "La fecha de inicio no puede ser anterior a hoy",
            ));
        }

        Ok(Self { value, date })
    }

    /// Start date loaded from storage.
    pub fn restore(date: NaiveDate) -> Self {
        Self {
            value: date.format(DATE_FORMAT).to_string(),
            date,
        }
    }

    /// The string this date was built from.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Last day of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDate {
    value: String,
    date: NaiveDate,
}

impl EndDate {
    /// Build an end date, checking it against `start` when one is known.
    pub fn new(value: impl Into<String>, start: Option<&StartDate>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::validation("La fecha de fin es obligatoria"));
        }

        let date = parse_calendar_date(&value)
            .ok_or_else(|| DomainError::validation("El formato de fecha de fin no es válido"))?;

        if date < today() {
            return Err(DomainError::validation(
                "La fecha de fin no puede ser anterior a hoy",
            ));
        }

        let end = Self { value, date };
        if let Some(start) = start {
            end.ensure_after(start)?;
        }

        Ok(end)
    }

    /// End date loaded from storage.
    pub fn restore(date: NaiveDate) -> Self {
        Self {
            value: date.format(DATE_FORMAT).to_string(),
            date,
        }
    }

    /// Fail unless this date falls strictly after `start`.
    pub fn ensure_after(&self, start: &StartDate) -> DomainResult<()> {
        if self.date <= start.date() {
            return Err(DomainError::validation(
                "La fecha de fin debe ser posterior a la fecha de inicio",
            ));
        }
        Ok(())
    }

    /// The string this date was built from.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
