//! Course database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Course, CourseId, Description, DomainError, EndDate, StartDate, Title};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Stored dates are restored as-is; only new input is held to "not before today".
impl TryFrom<Model> for Course {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Course::new(
            CourseId::new(model.id.to_string()),
            Title::new(model.title)?,
            Description::new(model.description)?,
            StartDate::restore(model.start_date),
            EndDate::restore(model.end_date),
        ))
    }
}
