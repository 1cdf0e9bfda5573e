//! Course repository: port and SeaORM implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use super::entities::course::{self, ActiveModel, Entity as CourseEntity};
use super::{hydrate, hydrate_all, parse_id};
use common::{AppError, AppResult};
use domain::filters::text_filter;
use domain::{Course, CourseFilters, CourseId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course persistence port. `save` hands back the stored course, id included.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn save(&self, course: &Course) -> AppResult<Course>;

    async fn find_by_id(&self, id: &CourseId) -> AppResult<Option<Course>>;

    async fn find_all(&self) -> AppResult<Vec<Course>>;

    async fn find_by_filters(&self, filters: &CourseFilters) -> AppResult<Vec<Course>>;

    async fn delete(&self, id: &CourseId) -> AppResult<bool>;
}

/// Postgres-backed course repository.
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn save(&self, course: &Course) -> AppResult<Course> {
        let now = Utc::now();
        let mut active = ActiveModel {
            title: Set(course.title().value().to_string()),
            description: Set(course.description().value().to_string()),
            start_date: Set(course.start_date().date()),
            end_date: Set(course.end_date().date()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = if course.id().is_assigned() {
            let id = parse_id(course.id().value())
                .ok_or_else(|| AppError::internal(format!("Malformed course id {}", course.id())))?;
            active.id = Set(id);
            active.update(&self.db).await?
        } else {
            active.id = Set(Uuid::new_v4());
            active.created_at = Set(now);
            active.insert(&self.db).await?
        };

        hydrate(model)
    }

    async fn find_by_id(&self, id: &CourseId) -> AppResult<Option<Course>> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(None);
        };

        CourseEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .order_by_asc(course::Column::StartDate)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn find_by_filters(&self, filters: &CourseFilters) -> AppResult<Vec<Course>> {
        debug!(?filters, "Filtering courses");
        let mut query = CourseEntity::find();

        if let Some(title) = text_filter(&filters.title) {
            query = query.filter(course::Column::Title.contains(title));
        }
        if let Some(description) = text_filter(&filters.description) {
            query = query.filter(course::Column::Description.contains(description));
        }
        if let Some(start) = filters.start_date {
            query = query.filter(course::Column::StartDate.gte(start));
        }
        if let Some(end) = filters.end_date {
            query = query.filter(course::Column::EndDate.lte(end));
        }
        if let Some(range) = filters.date_range {
            query = query.filter(course::Column::StartDate.between(range.start, range.end));
        }

        let models = query
            .order_by_asc(course::Column::StartDate)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn delete(&self, id: &CourseId) -> AppResult<bool> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(false);
        };

        let result = CourseEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
