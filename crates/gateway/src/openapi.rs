//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use domain::UserRole;
use records_service_lib::dto::{
    AuthenticatedUser, CourseResponseDto, CreateCourseDto, CreateEnrollmentDto, CreateStudentDto,
    CreateUserDto, EnrollmentResponseDto, LoginDto, LoginResponseDto, LoginUserDto,
    StudentResponseDto, UpdateCourseDto, UpdateStudentDto, UpdateUserDto, UserResponseDto,
};

use crate::handlers::{
    auth_handler, course_handler, enrollment_handler, student_handler, user_handler,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth_handler::login,
        auth_handler::logout,
        auth_handler::me,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::all_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        student_handler::create_student,
        student_handler::list_students,
        student_handler::all_students,
        student_handler::get_student,
        student_handler::update_student,
        student_handler::delete_student,
        course_handler::create_course,
        course_handler::list_courses,
        course_handler::all_courses,
        course_handler::get_course,
        course_handler::update_course,
        course_handler::delete_course,
        enrollment_handler::create_enrollment,
        enrollment_handler::list_enrollments,
        enrollment_handler::get_enrollment,
        enrollment_handler::enrollments_by_course,
        enrollment_handler::enrollments_by_student,
        enrollment_handler::delete_enrollment,
    ),
    components(
        schemas(
            LoginDto,
            LoginResponseDto,
            LoginUserDto,
            AuthenticatedUser,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            UserResponseDto,
            CreateStudentDto,
            UpdateStudentDto,
            StudentResponseDto,
            CreateCourseDto,
            UpdateCourseDto,
            CourseResponseDto,
            CreateEnrollmentDto,
            EnrollmentResponseDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, logout and the current user"),
        (name = "Users", description = "Staff user management"),
        (name = "Students", description = "Student records"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Enrollments", description = "Students enrolled in courses"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("opaque")
                        .build(),
                ),
            );
        }
    }
}
