//! Application state for dependency injection.

use std::sync::Arc;

use records_service_lib::infra::Database;
use records_service_lib::service::{
    AuthService, CourseService, EnrollmentService, ServiceContainer, StudentService, UserService,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub student_service: Arc<dyn StudentService>,
    pub course_service: Arc<dyn CourseService>,
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Absent when the services are not backed by Postgres
    pub database: Option<Database>,
}

impl AppState {
    /// Take every service from a container.
    pub fn from_container(container: &dyn ServiceContainer, database: Option<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            student_service: container.students(),
            course_service: container.courses(),
            enrollment_service: container.enrollments(),
            database,
        }
    }
}
