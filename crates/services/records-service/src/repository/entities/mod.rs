//! SeaORM entities, one module per table.

pub mod course;
pub mod enrollment;
pub mod personal_access_token;
pub mod student;
pub mod user;
pub mod user_role;
