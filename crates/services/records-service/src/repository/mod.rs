//! Repository layer: persistence ports and their SeaORM adapters.

pub mod entities;
mod course_repository;
mod enrollment_repository;
mod role_repository;
mod student_repository;
mod token_repository;
mod user_repository;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, Select, SqlErr};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::DomainError;

pub use course_repository::{CourseRepository, CourseStore};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use student_repository::{StudentRepository, StudentStore};
pub use token_repository::{AuthenticationTokenRepository, TokenStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use token_repository::MockAuthenticationTokenRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Store ids are UUIDs; anything else cannot match a row.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// Rebuild a domain entity from a row. A row that no longer validates is a
/// server-side problem, not bad client input.
fn hydrate<M, T>(model: M) -> AppResult<T>
where
    T: TryFrom<M, Error = DomainError>,
{
    T::try_from(model)
        .map_err(|e| AppError::internal(format!("Stored record failed validation: {}", e)))
}

fn hydrate_all<M, T>(models: Vec<M>) -> AppResult<Vec<T>>
where
    T: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(hydrate).collect()
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

/// Half-open UTC bounds covering every instant of the days `first..=last`.
/// The upper bound is open when `last` is the final representable day.
fn day_bounds(first: NaiveDate, last: NaiveDate) -> (DateTime<Utc>, Option<DateTime<Utc>>) {
    (midnight(first), last.succ_opt().map(midnight))
}

/// Narrow `query` to rows whose `column` falls on the days `first..=last`.
fn within_days<E, C>(query: Select<E>, column: C, first: NaiveDate, last: NaiveDate) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let (from, to) = day_bounds(first, last);
    let query = query.filter(column.gte(from));
    match to {
        Some(to) => query.filter(column.lt(to)),
        None => query,
    }
}

/// Map a unique-constraint violation to `message`, anything else to a
/// database error.
fn unique_violation_as(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::validation(message),
        _ => AppError::Database(err),
    }
}
