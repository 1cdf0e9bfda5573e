//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Value objects validate on construction; entities are only ever built from
//! already-validated value objects.

pub mod auth;
pub mod constants;
pub mod course;
pub mod email;
pub mod enrollment;
pub mod error;
pub mod filters;
pub mod ids;
pub mod student;
pub mod user;

pub use auth::{AuthenticationToken, TokenValue};
pub use constants::*;
pub use course::{Course, Description, EndDate, StartDate, Title};
pub use email::Email;
pub use enrollment::{EnrolledAt, Enrollment};
pub use error::{DomainError, DomainResult};
pub use filters::{CourseFilters, DateRange, StudentFilters, UserFilters};
pub use ids::{CourseId, EnrollmentId, StudentId, UserId};
pub use student::{FirstName, LastName, Student};
pub use user::{Argon2Hasher, Name, Password, PasswordHasher, Permission, User, UserRole};
