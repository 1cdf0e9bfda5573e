//! Data carried across the service boundary.
//!
//! Request DTOs hold raw client input; the services turn them into value
//! objects. Response DTOs are what handlers serialize back.

mod auth;
mod course;
mod enrollment;
mod patch;
mod student;
mod user;

pub use auth::{AuthenticatedUser, LoginDto, LoginResponseDto, LoginUserDto};
pub use course::{CourseResponseDto, CreateCourseDto, UpdateCourseDto};
pub use enrollment::{CreateEnrollmentDto, EnrollmentResponseDto};
pub use patch::Patch;
pub use student::{CreateStudentDto, StudentResponseDto, UpdateStudentDto};
pub use user::{CreateUserDto, UpdateUserDto, UserResponseDto};

use chrono::{DateTime, Utc};
use domain::DATETIME_FORMAT;

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
