//! User repository: port and SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::{hydrate, hydrate_all, parse_id, unique_violation_as, within_days};
use crate::messages::EMAIL_TAKEN;
use common::{AppError, AppResult};
use domain::filters::text_filter;
use domain::{Email, User, UserFilters, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence port.
///
/// `save` inserts users without an id and updates the rest. It does not
/// return the stored user; callers re-read by email to learn the new id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> AppResult<()>;

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_filters(&self, filters: &UserFilters) -> AppResult<Vec<User>>;

    /// Returns `false` when no user had this id.
    async fn delete(&self, id: &UserId) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;
}

/// Postgres-backed user repository.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: &User) -> AppResult<()> {
        let mut active = ActiveModel {
            name: Set(user.name().value().to_string()),
            email: Set(user.email().value().to_string()),
            password: Set(user.password().value().to_string()),
            updated_at: Set(user.updated_at()),
            ..Default::default()
        };

        let result = if user.id().is_assigned() {
            let id = parse_id(user.id().value())
                .ok_or_else(|| AppError::internal(format!("Malformed user id {}", user.id())))?;
            active.id = Set(id);
            active.update(&self.db).await.map(|_| ())
        } else {
            active.id = Set(Uuid::new_v4());
            active.created_at = Set(user.created_at());
            active.insert(&self.db).await.map(|_| ())
        };

        result.map_err(|e| unique_violation_as(e, EMAIL_TAKEN))
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(None);
        };

        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn find_by_filters(&self, filters: &UserFilters) -> AppResult<Vec<User>> {
        debug!(?filters, "Filtering users");
        let mut query = UserEntity::find();

        if let Some(name) = text_filter(&filters.name) {
            query = query.filter(user::Column::Name.contains(name));
        }
        if let Some(email) = text_filter(&filters.email) {
            query = query.filter(user::Column::Email.contains(email));
        }
        if let Some(day) = filters.created_at {
            query = within_days(query, user::Column::CreatedAt, day, day);
        }
        if let Some(range) = filters.date_range {
            query = within_days(query, user::Column::CreatedAt, range.start, range.end);
        }

        let models = query
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        hydrate_all(models)
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let Some(id) = parse_id(id.value()) else {
            return Ok(false);
        };

        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
