use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Patch;
use domain::{Course, DATE_FORMAT};

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateCourseDto {
    #[cfg_attr(feature = "openapi", schema(example = "Programación Web"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(example = "Curso completo de programación web"))]
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(example = "2030-02-01"))]
    pub start_date: String,
    #[cfg_attr(feature = "openapi", schema(example = "2030-06-30"))]
    pub end_date: String,
}

/// Partial course update. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UpdateCourseDto {
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub title: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub description: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub start_date: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub end_date: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseResponseDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(example = "2030-02-01"))]
    pub start_date: String,
    pub end_date: String,
}

impl From<&Course> for CourseResponseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            title: course.title().value().to_string(),
            description: course.description().value().to_string(),
            start_date: course.start_date().date().format(DATE_FORMAT).to_string(),
            end_date: course.end_date().date().format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<Course> for CourseResponseDto {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}
