//! Bearer token database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{AuthenticationToken, DomainError, TokenValue, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_access_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub token: String,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for AuthenticationToken {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(AuthenticationToken::new(
            Some(model.id),
            TokenValue::new(model.token)?,
            UserId::new(model.user_id.to_string()),
            model.created_at,
            model.expires_at,
        ))
    }
}
