//! Service container: builds every use-case service over one connection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, CourseManager, CourseService, EnrollmentManager,
    EnrollmentService, StudentManager, StudentService, UserManager, UserService,
};
use crate::config::RecordsServiceConfig;
use crate::repository::{CourseStore, EnrollmentStore, RoleStore, StudentStore, TokenStore, UserStore};
use domain::{Argon2Hasher, PasswordHasher};

/// Access to every use-case service.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn students(&self) -> Arc<dyn StudentService>;

    fn courses(&self) -> Arc<dyn CourseService>;

    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    student_service: Arc<dyn StudentService>,
    course_service: Arc<dyn CourseService>,
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        student_service: Arc<dyn StudentService>,
        course_service: Arc<dyn CourseService>,
        enrollment_service: Arc<dyn EnrollmentService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            student_service,
            course_service,
            enrollment_service,
        }
    }

    /// Wire the Postgres stores and Argon2 into every service.
    pub fn from_connection(db: DatabaseConnection, config: &RecordsServiceConfig) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let roles = Arc::new(RoleStore::new(db.clone()));
        let students = Arc::new(StudentStore::new(db.clone()));
        let courses = Arc::new(CourseStore::new(db.clone()));
        let enrollments = Arc::new(EnrollmentStore::new(db.clone()));
        let tokens = Arc::new(TokenStore::new(db));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher);

        Self::new(
            Arc::new(Authenticator::new(
                users.clone(),
                roles.clone(),
                tokens,
                hasher.clone(),
                config.token.expiration_hours,
            )),
            Arc::new(UserManager::new(users, roles, hasher)),
            Arc::new(StudentManager::new(students.clone())),
            Arc::new(CourseManager::new(courses.clone())),
            Arc::new(EnrollmentManager::new(enrollments, students, courses)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}
