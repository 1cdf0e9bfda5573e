//! Listing filters.
//!
//! Every field is optional and narrows the result independently. Blank
//! strings count as absent.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Parses `start,end`, for example `2024-01-01,2024-12-31`.
impl FromStr for DateRange {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation("El rango de fechas debe tener el formato inicio,fin");

        let (start, end) = s.split_once(',').ok_or_else(invalid)?;
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).map_err(|_| invalid())?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).map_err(|_| invalid())?;

        Ok(Self::new(start, end))
    }
}

impl TryFrom<String> for DateRange {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        value.parse()
    }
}

/// Text filter value, or `None` when blank.
pub fn text_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Filters for the user listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserFilters {
    /// Substring of the name
    pub name: Option<String>,
    /// Substring of the email
    pub email: Option<String>,
    /// Calendar day the account was created
    pub created_at: Option<NaiveDate>,
    /// Creation day range
    pub date_range: Option<DateRange>,
}

impl UserFilters {
    pub fn is_empty(&self) -> bool {
        text_filter(&self.name).is_none()
            && text_filter(&self.email).is_none()
            && self.created_at.is_none()
            && self.date_range.is_none()
    }
}

/// Filters for the student listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentFilters {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Matches first name OR last name
    pub name: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub date_range: Option<DateRange>,
}

impl StudentFilters {
    pub fn is_empty(&self) -> bool {
        text_filter(&self.first_name).is_none()
            && text_filter(&self.last_name).is_none()
            && text_filter(&self.email).is_none()
            && text_filter(&self.name).is_none()
            && self.created_at.is_none()
            && self.date_range.is_none()
    }
}

/// Filters for the course listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CourseFilters {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Courses starting on or after this day
    pub start_date: Option<NaiveDate>,
    /// Courses ending on or before this day
    pub end_date: Option<NaiveDate>,
    /// Range applied to the start date
    pub date_range: Option<DateRange>,
}

impl CourseFilters {
    pub fn is_empty(&self) -> bool {
        text_filter(&self.title).is_none()
            && text_filter(&self.description).is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.date_range.is_none()
    }
}
