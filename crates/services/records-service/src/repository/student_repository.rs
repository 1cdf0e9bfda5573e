//! Student repository: port and SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use super::{hydrate, hydrate_all, parse_id, unique_violation_as, within_days};
use crate::messages::EMAIL_TAKEN;
use common::{AppError, AppResult};
use domain::filters::text_filter;
use domain::{Email, Student, StudentFilters, StudentId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student persistence port. Same save semantics as users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn save(&self, student: &Student) -> AppResult<()>;

    async fn find_by_id(&self, id: &StudentId) -> AppResult<Option<Student>>;

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Student>>;

    async fn find_all(&self) -> AppResult<Vec<Student>>;

    async fn find_by_filters(&self, filters: &StudentFilters) -> AppResult<Vec<Student>>;

    async fn delete(&self, id: &StudentId) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;
}

/// Postgres-backed student repository.
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn save(&self, student: &Student) -> AppResult<()> {
        let mut active = ActiveModel {
            first_name: Set(student.first_name().value().to_string()),
            last_name: Set(student.last_name().value().to_string()),
            email: Set(student.email().value().to_string()),
            updated_at: Set(student.updated_at()),
            ..Default::default()
        };

        let result = if student.id().is_assigned() {
            let id = parse_id(student.id().value()).ok_or_else(|| {
                AppError::internal(format!("Malformed student id {}", student.id()))
            })?;
            active.id = Set(id);
            active.update(&self.db).await.map(|_| ())
        } else {
            active.id = Set(Uuid::new_v4());
            active.created_at = Set(student.created_at());
            active.insert(&self.db).await.map(|_| ())
        };

        result.map_err(|e| unique_violation_as(e, EMAIL_TAKEN))
    }

    async fn find_by_id(&self, id: &StudentId) -> AppResult<Option<Student>> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(None);
        };

        StudentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Student>> {
        StudentEntity::find()
            .filter(student::Column::Email.eq(email.value()))
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .order_by_asc(student::Column::CreatedAt)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn find_by_filters(&self, filters: &StudentFilters) -> AppResult<Vec<Student>> {
        debug!(?filters, "Filtering students");
        let mut query = StudentEntity::find();

        if let Some(first_name) = text_filter(&filters.first_name) {
            query = query.filter(student::Column::FirstName.contains(first_name));
        }
        if let Some(last_name) = text_filter(&filters.last_name) {
            query = query.filter(student::Column::LastName.contains(last_name));
        }
        if let Some(email) = text_filter(&filters.email) {
            query = query.filter(student::Column::Email.contains(email));
        }
        if let Some(name) = text_filter(&filters.name) {
            query = query.filter(
                Condition::any()
                    .add(student::Column::FirstName.contains(name))
                    .add(student::Column::LastName.contains(name)),
            );
        }
        if let Some(day) = filters.created_at {
            query = within_days(query, student::Column::CreatedAt, day, day);
        }
        if let Some(range) = filters.date_range {
            query = within_days(query, student::Column::CreatedAt, range.start, range.end);
        }

        let models = query
            .order_by_asc(student::Column::CreatedAt)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn delete(&self, id: &StudentId) -> AppResult<bool> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(false);
        };

        let result = StudentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let count = StudentEntity::find()
            .filter(student::Column::Email.eq(email.value()))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
