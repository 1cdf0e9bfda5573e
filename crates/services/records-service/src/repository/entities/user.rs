//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Email, Name, Password, User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::new(model.id.to_string()),
            Name::new(model.name)?,
            Email::new(model.email)?,
            Password::from_hash(model.password)?,
            model.created_at,
            model.updated_at,
        ))
    }
}
