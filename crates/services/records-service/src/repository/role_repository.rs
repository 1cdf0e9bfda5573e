//! Role assignment: kept beside the user aggregate, not inside it.

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use super::entities::user_role::{self, ActiveModel, Entity as UserRoleEntity};
use super::parse_id;
use common::{AppError, AppResult};
use domain::{UserId, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role assignment port.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Give `user_id` exactly this role, replacing any previous one.
    async fn assign_role(&self, user_id: &UserId, role: UserRole) -> AppResult<()>;

    async fn find_role(&self, user_id: &UserId) -> AppResult<Option<UserRole>>;
}

/// Postgres-backed role assignment.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn assign_role(&self, user_id: &UserId, role: UserRole) -> AppResult<()> {
        let id = parse_id(user_id.value())
            .ok_or_else(|| AppError::internal(format!("Malformed user id {}", user_id)))?;

        let active = ActiveModel {
            user_id: Set(id),
            role: Set(role.to_string()),
        };

        UserRoleEntity::insert(active)
            .on_conflict(
                OnConflict::column(user_role::Column::UserId)
                    .update_column(user_role::Column::Role)
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn find_role(&self, user_id: &UserId) -> AppResult<Option<UserRole>> {
        let Some(id) = parse_id(user_id.value()) else {
            return Ok(None);
        };

        let Some(model) = UserRoleEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        model
            .role
            .parse()
            .map(Some)
            .map_err(|_| AppError::internal(format!("Unknown stored role {}", model.role)))
    }
}
