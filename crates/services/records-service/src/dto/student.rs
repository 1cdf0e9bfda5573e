use serde::{Deserialize, Serialize};
use validator::Validate;

use super::format_timestamp;
use domain::Student;

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateStudentDto {
    #[cfg_attr(feature = "openapi", schema(example = "Juan"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Pérez"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "juan.perez@example.com"))]
    pub email: String,
}

/// Full replacement of a student's data; every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentResponseDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Student> for StudentResponseDto {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            first_name: student.first_name().value().to_string(),
            last_name: student.last_name().value().to_string(),
            email: student.email().value().to_string(),
            created_at: format_timestamp(student.created_at()),
            updated_at: format_timestamp(student.updated_at()),
        }
    }
}

impl From<Student> for StudentResponseDto {
    fn from(student: Student) -> Self {
        Self::from(&student)
    }
}
