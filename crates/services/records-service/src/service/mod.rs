//! Use-case services.
//!
//! Each trait is the seam the HTTP layer depends on; the `*Manager` types
//! implement it over the repository ports.

mod auth_service;
mod container;
mod course_service;
mod enrollment_service;
mod student_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator};
pub use container::{ServiceContainer, Services};
pub use course_service::{CourseManager, CourseService};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use student_service::{StudentManager, StudentService};
pub use user_service::{UserManager, UserService};
