//! HTTP handlers, one module per resource.

pub mod auth_handler;
pub mod course_handler;
pub mod enrollment_handler;
pub mod health_handler;
pub mod student_handler;
pub mod user_handler;

pub use course_handler::course_routes;
pub use enrollment_handler::enrollment_routes;
pub use health_handler::health_routes;
pub use student_handler::student_routes;
pub use user_handler::user_routes;
