//! Enrollment use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{CourseId, EnrolledAt, Enrollment, EnrollmentId, StudentId};

use crate::dto::{CreateEnrollmentDto, EnrollmentResponseDto};
use crate::messages::{
    ALREADY_ENROLLED, ENROLLMENT_COURSE_MISSING, ENROLLMENT_NOT_FOUND, ENROLLMENT_STUDENT_MISSING,
};
use crate::repository::{CourseRepository, EnrollmentRepository, StudentRepository};

#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enroll a student in a course, at most once per pair.
    async fn create_enrollment(&self, dto: CreateEnrollmentDto) -> AppResult<EnrollmentResponseDto>;

    async fn delete_enrollment(&self, id: &str) -> AppResult<()>;

    async fn get_enrollment(&self, id: &str) -> AppResult<EnrollmentResponseDto>;

    async fn list_enrollments(&self) -> AppResult<Vec<EnrollmentResponseDto>>;

    async fn enrollments_by_course(&self, course_id: &str) -> AppResult<Vec<EnrollmentResponseDto>>;

    async fn enrollments_by_student(&self, student_id: &str)
        -> AppResult<Vec<EnrollmentResponseDto>>;
}

pub struct EnrollmentManager {
    enrollments: Arc<dyn EnrollmentRepository>,
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentManager {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            enrollments,
            students,
            courses,
        }
    }
}

fn to_responses(enrollments: Vec<Enrollment>) -> Vec<EnrollmentResponseDto> {
    enrollments
        .into_iter()
        .map(EnrollmentResponseDto::from)
        .collect()
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn create_enrollment(&self, dto: CreateEnrollmentDto) -> AppResult<EnrollmentResponseDto> {
        let course_id = CourseId::new(dto.course_id);
        let student_id = StudentId::new(dto.student_id);
        let enrolled_at = match dto.enrolled_at.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => EnrolledAt::new(raw)?,
            _ => EnrolledAt::now(),
        };

        if self
            .enrollments
            .find_by_course_and_student(&course_id, &student_id)
            .await?
            .is_some()
        {
            return Err(AppError::validation(ALREADY_ENROLLED));
        }

        if self.students.find_by_id(&student_id).await?.is_none() {
            return Err(AppError::validation(ENROLLMENT_STUDENT_MISSING));
        }

        if self.courses.find_by_id(&course_id).await?.is_none() {
            return Err(AppError::validation(ENROLLMENT_COURSE_MISSING));
        }

        let enrollment = self
            .enrollments
            .save(&Enrollment::create(course_id, student_id, enrolled_at))
            .await?;

        info!(
            enrollment_id = %enrollment.id(),
            course_id = %enrollment.course_id(),
            student_id = %enrollment.student_id(),
            "Student enrolled"
        );
        Ok(EnrollmentResponseDto::from(enrollment))
    }

    async fn delete_enrollment(&self, id: &str) -> AppResult<()> {
        if !self.enrollments.delete(&EnrollmentId::new(id)).await? {
            return Err(AppError::not_found(ENROLLMENT_NOT_FOUND));
        }
        info!(enrollment_id = %id, "Enrollment deleted");
        Ok(())
    }

    async fn get_enrollment(&self, id: &str) -> AppResult<EnrollmentResponseDto> {
        self.enrollments
            .find_by_id(&EnrollmentId::new(id))
            .await?
            .map(EnrollmentResponseDto::from)
            .ok_or_not_found(ENROLLMENT_NOT_FOUND)
    }

    async fn list_enrollments(&self) -> AppResult<Vec<EnrollmentResponseDto>> {
        Ok(to_responses(self.enrollments.find_all().await?))
    }

    async fn enrollments_by_course(&self, course_id: &str) -> AppResult<Vec<EnrollmentResponseDto>> {
        let enrollments = self
            .enrollments
            .find_by_course(&CourseId::new(course_id))
            .await?;
        Ok(to_responses(enrollments))
    }

    async fn enrollments_by_student(
        &self,
        student_id: &str,
    ) -> AppResult<Vec<EnrollmentResponseDto>> {
        let enrollments = self
            .enrollments
            .find_by_student(&StudentId::new(student_id))
            .await?;
        Ok(to_responses(enrollments))
    }
}
