//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Email, FirstName, LastName, Student, StudentId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Student {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Student::new(
            StudentId::new(model.id.to_string()),
            FirstName::new(model.first_name)?,
            LastName::new(model.last_name)?,
            Email::new(model.email)?,
            model.created_at,
            model.updated_at,
        ))
    }
}
