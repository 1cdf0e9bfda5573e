//! Enrollment repository: port and SeaORM implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::enrollment::{self, ActiveModel, Entity as EnrollmentEntity};
use super::{parse_id, unique_violation_as};
use crate::messages::ALREADY_ENROLLED;
use common::{AppError, AppResult};
use domain::{CourseId, Enrollment, EnrollmentId, StudentId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment persistence port.
///
/// A (course, student) pair is stored at most once; a second `save` of the
/// same pair fails with a validation error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn save(&self, enrollment: &Enrollment) -> AppResult<Enrollment>;

    async fn find_by_id(&self, id: &EnrollmentId) -> AppResult<Option<Enrollment>>;

    async fn find_all(&self) -> AppResult<Vec<Enrollment>>;

    async fn find_by_course_and_student(
        &self,
        course_id: &CourseId,
        student_id: &StudentId,
    ) -> AppResult<Option<Enrollment>>;

    async fn find_by_course(&self, course_id: &CourseId) -> AppResult<Vec<Enrollment>>;

    async fn find_by_student(&self, student_id: &StudentId) -> AppResult<Vec<Enrollment>>;

    async fn delete(&self, id: &EnrollmentId) -> AppResult<bool>;
}

/// Postgres-backed enrollment repository.
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn required_id(raw: &str, what: &str) -> AppResult<Uuid> {
    parse_id(raw).ok_or_else(|| AppError::internal(format!("Malformed {} id {}", what, raw)))
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn save(&self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        let now = Utc::now();
        let mut active = ActiveModel {
            course_id: Set(required_id(enrollment.course_id().value(), "course")?),
            student_id: Set(required_id(enrollment.student_id().value(), "student")?),
            enrolled_at: Set(enrollment.enrolled_at().value()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = if enrollment.id().is_assigned() {
            active.id = Set(required_id(enrollment.id().value(), "enrollment")?);
            active.update(&self.db).await
        } else {
            active.id = Set(Uuid::new_v4());
            active.created_at = Set(now);
            active.insert(&self.db).await
        };

        result
            .map(Enrollment::from)
            .map_err(|e| unique_violation_as(e, ALREADY_ENROLLED))
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> AppResult<Option<Enrollment>> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(None);
        };

        let model = EnrollmentEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Enrollment::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .order_by_asc(enrollment::Column::EnrolledAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn find_by_course_and_student(
        &self,
        course_id: &CourseId,
        student_id: &StudentId,
    ) -> AppResult<Option<Enrollment>> {
        let (Some(course_id), Some(student_id)) =
            (parse_id(course_id.value()), parse_id(student_id.value()))
        else {
            return Ok(None);
        };

        let model = EnrollmentEntity::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .filter(enrollment::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await?;

        Ok(model.map(Enrollment::from))
    }

    async fn find_by_course(&self, course_id: &CourseId) -> AppResult<Vec<Enrollment>> {
        let Some(course_id) = parse_id(course_id.value()) else {
            return Ok(Vec::new());
        };

        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(enrollment::Column::EnrolledAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn find_by_student(&self, student_id: &StudentId) -> AppResult<Vec<Enrollment>> {
        let Some(student_id) = parse_id(student_id.value()) else {
            return Ok(Vec::new());
        };

        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(enrollment::Column::EnrolledAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn delete(&self, id: &EnrollmentId) -> AppResult<bool> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(false);
        };

        let result = EnrollmentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
