//! Enrollment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{CourseId, EnrolledAt, Enrollment, EnrollmentId, StudentId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub student_id: Uuid,
    pub enrolled_at: DateTime,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment::new(
            EnrollmentId::new(model.id.to_string()),
            CourseId::new(model.course_id.to_string()),
            StudentId::new(model.student_id.to_string()),
            EnrolledAt::from_datetime(model.enrolled_at),
        )
    }
}
