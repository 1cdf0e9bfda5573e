//! Enrollment aggregate: a student signed up for a course.

use std::fmt;

use chrono::{NaiveDateTime, Timelike, Utc};

use crate::constants::DATETIME_FORMAT;
use crate::error::{DomainError, DomainResult};
use crate::ids::{CourseId, EnrollmentId, StudentId};

/// Moment a student was enrolled, to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnrolledAt(NaiveDateTime);

impl EnrolledAt {
    /// Parse `YYYY-MM-DD HH:MM:SS`. Input that would be normalized (out of
    /// range fields, missing zero padding) is rejected.
    pub fn new(value: &str) -> DomainResult<Self> {
        let invalid = || DomainError::validation("Formato de fecha inválido. Use Y-m-d H:i:s");

        let parsed = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| invalid())?;

        // chrono reports a leap second as a nanosecond overflow
        if parsed.nanosecond() >= 1_000_000_000 {
            return Err(invalid());
        }

        if parsed.format(DATETIME_FORMAT).to_string() != value {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Current UTC time truncated to whole seconds.
    pub fn now() -> Self {
        let now = Utc::now().naive_utc();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Timestamp loaded from storage.
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        Self(value.with_nanosecond(0).unwrap_or(value))
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for EnrolledAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

/// Link between a student and a course. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    id: EnrollmentId,
    course_id: CourseId,
    student_id: StudentId,
    enrolled_at: EnrolledAt,
}

impl Enrollment {
    pub fn new(
        id: EnrollmentId,
        course_id: CourseId,
        student_id: StudentId,
        enrolled_at: EnrolledAt,
    ) -> Self {
        Self {
            id,
            course_id,
            student_id,
            enrolled_at,
        }
    }

    /// New, unsaved enrollment. The store assigns the id.
    pub fn create(course_id: CourseId, student_id: StudentId, enrolled_at: EnrolledAt) -> Self {
        Self::new(EnrollmentId::unassigned(), course_id, student_id, enrolled_at)
    }

    pub fn id(&self) -> &EnrollmentId {
        &self.id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn enrolled_at(&self) -> EnrolledAt {
        self.enrolled_at
    }
}
