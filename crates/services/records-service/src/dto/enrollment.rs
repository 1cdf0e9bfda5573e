use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::Enrollment;

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateEnrollmentDto {
    #[validate(length(min = 1, message = "El estudiante es obligatorio"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "El curso es obligatorio"))]
    pub course_id: String,
    /// `YYYY-MM-DD HH:MM:SS`; defaults to now
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-15 09:00:00"))]
    pub enrolled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnrollmentResponseDto {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "2030-01-15 09:00:00"))]
    pub enrolled_at: String,
}

impl From<&Enrollment> for EnrollmentResponseDto {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id().to_string(),
            student_id: enrollment.student_id().to_string(),
            course_id: enrollment.course_id().to_string(),
            enrolled_at: enrollment.enrolled_at().to_string(),
        }
    }
}

impl From<Enrollment> for EnrollmentResponseDto {
    fn from(enrollment: Enrollment) -> Self {
        Self::from(&enrollment)
    }
}
