//! Bearer token repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::personal_access_token::{self, ActiveModel, Entity as TokenEntity};
use super::{hydrate, parse_id};
use common::{AppError, AppResult};
use domain::{AuthenticationToken, TokenValue, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthenticationTokenRepository: Send + Sync {
    /// Store a new token and return it with its assigned id.
    async fn save(&self, token: &AuthenticationToken) -> AppResult<AuthenticationToken>;

    async fn find_by_token(&self, token: &TokenValue) -> AppResult<Option<AuthenticationToken>>;

    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<AuthenticationToken>>;

    /// Revoke every token of a user. Returns how many were removed.
    async fn delete_by_user_id(&self, user_id: &UserId) -> AppResult<u64>;

    async fn delete_by_token(&self, token: &TokenValue) -> AppResult<bool>;
}

pub struct TokenStore {
    db: DatabaseConnection,
}

impl TokenStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthenticationTokenRepository for TokenStore {
    async fn save(&self, token: &AuthenticationToken) -> AppResult<AuthenticationToken> {
        let user_id = parse_id(token.user_id().value()).ok_or_else(|| {
            AppError::internal(format!("Malformed user id {}", token.user_id()))
        })?;

        let active = ActiveModel {
            user_id: Set(user_id),
            token: Set(token.token().value().to_string()),
            created_at: Set(token.created_at()),
            expires_at: Set(token.expires_at()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(token.clone().with_id(model.id))
    }

    async fn find_by_token(&self, token: &TokenValue) -> AppResult<Option<AuthenticationToken>> {
        TokenEntity::find()
            .filter(personal_access_token::Column::Token.eq(token.value()))
            .one(&self.db)
            .await?
            .map(hydrate)
            .transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<AuthenticationToken>> {
        let Some(user_id) = parse_id(user_id.value()) else {
            return Ok(Vec::new());
        };

        let models = TokenEntity::find()
            .filter(personal_access_token::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;

        models.into_iter().map(hydrate).collect()
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> AppResult<u64> {
        let Some(user_id) = parse_id(user_id.value()) else {
            return Ok(0);
        };

        let result = TokenEntity::delete_many()
            .filter(personal_access_token::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_token(&self, token: &TokenValue) -> AppResult<bool> {
        let result = TokenEntity::delete_many()
            .filter(personal_access_token::Column::Token.eq(token.value()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
