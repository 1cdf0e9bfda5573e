//! Router-level tests against fake services.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, AppResult};
use domain::{CourseFilters, StudentFilters, UserFilters, UserId, UserRole, TOKEN_TYPE_BEARER};
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use records_service_lib::dto::{
    AuthenticatedUser, CourseResponseDto, CreateCourseDto, CreateEnrollmentDto, CreateStudentDto,
    CreateUserDto, EnrollmentResponseDto, LoginDto, LoginResponseDto, LoginUserDto,
    StudentResponseDto, UpdateCourseDto, UpdateStudentDto, UpdateUserDto, UserResponseDto,
};
use records_service_lib::messages::{TOKEN_INVALID, TOKEN_MISSING};
use records_service_lib::service::{
    AuthService, CourseService, EnrollmentService, StudentService, UserService,
};

const ADMIN_TOKEN: &str = "admin-token";
const SECRETARY_TOKEN: &str = "secretary-token";

// =============================================================================
// Fakes
// =============================================================================

/// Answers every use case with canned data and records what was called.
#[derive(Default)]
struct FakeRecords {
    calls: Mutex<Vec<String>>,
}

impl FakeRecords {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn staff(id: &str, role: UserRole) -> AuthenticatedUser {
    AuthenticatedUser {
        id: id.to_string(),
        name: "Staff".to_string(),
        email: format!("{id}@example.com"),
        role: Some(role),
    }
}

fn user_dto(id: &str) -> UserResponseDto {
    UserResponseDto {
        id: id.to_string(),
        name: "Laura Gómez".to_string(),
        email: "laura@example.com".to_string(),
        created_at: "2030-01-01 10:00:00".to_string(),
        updated_at: "2030-01-01 10:00:00".to_string(),
    }
}

fn student_dto(id: &str) -> StudentResponseDto {
    StudentResponseDto {
        id: id.to_string(),
        first_name: "Juan".to_string(),
        last_name: "Pérez".to_string(),
        email: "juan@example.com".to_string(),
        created_at: "2030-01-01 10:00:00".to_string(),
        updated_at: "2030-01-01 10:00:00".to_string(),
    }
}

fn course_dto(id: &str) -> CourseResponseDto {
    CourseResponseDto {
        id: id.to_string(),
        title: "Programación Web".to_string(),
        description: "Curso completo".to_string(),
        start_date: "2030-02-01".to_string(),
        end_date: "2030-06-30".to_string(),
    }
}

fn enrollment_dto(id: &str, student_id: &str, course_id: &str) -> EnrollmentResponseDto {
    EnrollmentResponseDto {
        id: id.to_string(),
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
        enrolled_at: "2030-01-15 09:00:00".to_string(),
    }
}

#[async_trait]
impl AuthService for FakeRecords {
    async fn login(&self, dto: LoginDto) -> AppResult<LoginResponseDto> {
        if dto.password != "password123" {
            return Err(AppError::InvalidCredentials);
        }
        Ok(LoginResponseDto {
            token: ADMIN_TOKEN.to_string(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: 86_400,
            user: LoginUserDto {
                id: "u-1".to_string(),
                name: "Administrador".to_string(),
                email: dto.email,
            },
        })
    }

    async fn logout(&self, user_id: &UserId) -> AppResult<()> {
        self.record(format!("logout {user_id}"));
        Ok(())
    }

    async fn authenticate(&self, token: Option<&str>) -> AppResult<AuthenticatedUser> {
        match token {
            None => Err(AppError::Unauthorized(TOKEN_MISSING.to_string())),
            Some(ADMIN_TOKEN) => Ok(staff("u-1", UserRole::Admin)),
            Some(SECRETARY_TOKEN) => Ok(staff("u-2", UserRole::Secretary)),
            Some(_) => Err(AppError::Unauthorized(TOKEN_INVALID.to_string())),
        }
    }

    async fn current_user(&self, user_id: Option<&UserId>) -> AppResult<AuthenticatedUser> {
        let user_id = user_id.ok_or_else(|| AppError::Unauthorized("User not authenticated".into()))?;
        Ok(staff(&user_id.to_string(), UserRole::Admin))
    }
}

#[async_trait]
impl UserService for FakeRecords {
    async fn create_user(&self, dto: CreateUserDto) -> AppResult<UserResponseDto> {
        self.record(format!("create_user {}", dto.email));
        Ok(user_dto("u-9"))
    }

    async fn update_user(&self, id: &str, _dto: UpdateUserDto) -> AppResult<UserResponseDto> {
        Ok(user_dto(id))
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.record(format!("delete_user {id}"));
        Ok(())
    }

    async fn get_user(&self, id: &str) -> AppResult<UserResponseDto> {
        Err(AppError::NotFound(format!("User not found: {id}")))
    }

    async fn list_users(&self, filters: UserFilters) -> AppResult<Vec<UserResponseDto>> {
        self.record(format!("list_users {:?}", filters.name));
        Ok(vec![user_dto("u-1")])
    }

    async fn all_users(&self) -> AppResult<Vec<UserResponseDto>> {
        Ok(vec![user_dto("u-1"), user_dto("u-2")])
    }
}

#[async_trait]
impl StudentService for FakeRecords {
    async fn create_student(&self, _dto: CreateStudentDto) -> AppResult<StudentResponseDto> {
        Ok(student_dto("s-1"))
    }

    async fn update_student(&self, id: &str, _dto: UpdateStudentDto) -> AppResult<StudentResponseDto> {
        Ok(student_dto(id))
    }

    async fn delete_student(&self, id: &str) -> AppResult<()> {
        self.record(format!("delete_student {id}"));
        Ok(())
    }

    async fn get_student(&self, id: &str) -> AppResult<StudentResponseDto> {
        Ok(student_dto(id))
    }

    async fn list_students(&self, _filters: StudentFilters) -> AppResult<Vec<StudentResponseDto>> {
        Ok(vec![student_dto("s-1")])
    }

    async fn all_students(&self) -> AppResult<Vec<StudentResponseDto>> {
        Ok(vec![student_dto("s-1")])
    }
}

#[async_trait]
impl CourseService for FakeRecords {
    async fn create_course(&self, _dto: CreateCourseDto) -> AppResult<CourseResponseDto> {
        Ok(course_dto("c-1"))
    }

    async fn update_course(&self, id: &str, _dto: UpdateCourseDto) -> AppResult<CourseResponseDto> {
        Ok(course_dto(id))
    }

    async fn delete_course(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }

    async fn get_course(&self, id: &str) -> AppResult<CourseResponseDto> {
        Ok(course_dto(id))
    }

    async fn list_courses(&self, filters: CourseFilters) -> AppResult<Vec<CourseResponseDto>> {
        self.record(format!("list_courses {:?}", filters.start_date));
        Ok(vec![course_dto("c-1")])
    }

    async fn all_courses(&self) -> AppResult<Vec<CourseResponseDto>> {
        Ok(vec![course_dto("c-1")])
    }
}

#[async_trait]
impl EnrollmentService for FakeRecords {
    async fn create_enrollment(&self, dto: CreateEnrollmentDto) -> AppResult<EnrollmentResponseDto> {
        Ok(enrollment_dto("e-1", &dto.student_id, &dto.course_id))
    }

    async fn delete_enrollment(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }

    async fn get_enrollment(&self, id: &str) -> AppResult<EnrollmentResponseDto> {
        Ok(enrollment_dto(id, "s-1", "c-1"))
    }

    async fn list_enrollments(&self) -> AppResult<Vec<EnrollmentResponseDto>> {
        Ok(vec![enrollment_dto("e-1", "s-1", "c-1")])
    }

    async fn enrollments_by_course(&self, course_id: &str) -> AppResult<Vec<EnrollmentResponseDto>> {
        self.record(format!("by_course {course_id}"));
        Ok(vec![enrollment_dto("e-1", "s-1", course_id)])
    }

    async fn enrollments_by_student(
        &self,
        student_id: &str,
    ) -> AppResult<Vec<EnrollmentResponseDto>> {
        Ok(vec![enrollment_dto("e-1", student_id, "c-1")])
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn app() -> (Router, Arc<FakeRecords>) {
    let fake = Arc::new(FakeRecords::default());
    let state = AppState {
        auth_service: fake.clone(),
        user_service: fake.clone(),
        student_service: fake.clone(),
        course_service: fake.clone(),
        enrollment_service: fake.clone(),
        database: None,
    };
    (create_router(state), fake)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_wraps_token_in_envelope() {
    let (app, _) = app();
    let body = json!({"email": "admin@example.com", "password": "password123"});

    let (status, body) = send(app, request(Method::POST, "/v1/auth/login", None, Some(body))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login exitoso");
    assert_eq!(body["data"]["token"], ADMIN_TOKEN);
    assert_eq!(body["data"]["token_type"], "Bearer");
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let (app, _) = app();
    let body = json!({"email": "not-an-email", "password": "password123"});

    let (status, body) = send(app, request(Method::POST, "/v1/auth/login", None, Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "El formato del email no es válido");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let (app, _) = app();
    let body = json!({"email": "admin@example.com", "password": "nope"});

    let (status, _) = send(app, request(Method::POST, "/v1/auth/login", None, Some(body))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _) = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = app();

    let (status, body) = send(app, request(Method::GET, "/v1/users", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), TOKEN_MISSING);
}

#[tokio::test]
async fn test_protected_route_with_unknown_token() {
    let (app, _) = app();

    let (status, body) = send(app, request(Method::GET, "/v1/courses", Some("bogus"), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), TOKEN_INVALID);
}

#[tokio::test]
async fn test_logout_revokes_for_caller() {
    let (app, fake) = app();

    let (status, body) =
        send(app, request(Method::POST, "/v1/auth/logout", Some(SECRETARY_TOKEN), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Logout exitoso"}));
    assert_eq!(fake.calls(), vec!["logout u-2".to_string()]);
}

#[tokio::test]
async fn test_me_returns_caller() {
    let (app, _) = app();

    let (status, body) = send(app, request(Method::GET, "/v1/auth/me", Some(ADMIN_TOKEN), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "u-1");
    assert_eq!(body["data"]["role"], "admin");
}

// =============================================================================
// Permissions
// =============================================================================

#[tokio::test]
async fn test_secretary_cannot_delete_users() {
    let (app, fake) = app();

    let (status, body) =
        send(app, request(Method::DELETE, "/v1/users/u-5", Some(SECRETARY_TOKEN), None)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_message(&body), "User does not have the right permissions");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_secretary_can_list_users() {
    let (app, _) = app();

    let (status, body) = send(app, request(Method::GET, "/v1/users/all", Some(SECRETARY_TOKEN), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_admin_deletes_student() {
    let (app, fake) = app();

    let (status, body) =
        send(app, request(Method::DELETE, "/v1/students/s-1", Some(ADMIN_TOKEN), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Estudiante eliminado exitosamente"}));
    assert_eq!(fake.calls(), vec!["delete_student s-1".to_string()]);
}

// =============================================================================
// Resources
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_created() {
    let (app, fake) = app();
    let body = json!({
        "name": "Laura Gómez",
        "email": "laura@example.com",
        "password": "password123",
        "role": "secretary"
    });

    let (status, body) = send(app, request(Method::POST, "/v1/users", Some(ADMIN_TOKEN), Some(body))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Usuario creado exitosamente");
    assert_eq!(body["data"]["id"], "u-9");
    assert_eq!(fake.calls(), vec!["create_user laura@example.com".to_string()]);
}

#[tokio::test]
async fn test_create_user_rejects_unknown_role() {
    let (app, fake) = app();
    let body = json!({
        "name": "Laura Gómez",
        "email": "laura@example.com",
        "password": "password123",
        "role": "guest"
    });

    let (status, body) = send(app, request(Method::POST, "/v1/users", Some(ADMIN_TOKEN), Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "El rol debe ser admin o secretary");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let (app, _) = app();

    let (status, _) = send(app, request(Method::GET, "/v1/users/u-404", Some(ADMIN_TOKEN), None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_course_carries_message() {
    let (app, _) = app();
    let body = json!({"title": "Bases de Datos"});

    let (status, body) =
        send(app, request(Method::PUT, "/v1/courses/c-7", Some(SECRETARY_TOKEN), Some(body))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Curso actualizado exitosamente");
    assert_eq!(body["data"]["id"], "c-7");
}

#[tokio::test]
async fn test_course_filters_are_parsed_from_query() {
    let (app, fake) = app();

    let (status, _) = send(
        app,
        request(Method::GET, "/v1/courses?start_date=2030-02-01", Some(ADMIN_TOKEN), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fake.calls(), vec!["list_courses Some(2030-02-01)".to_string()]);
}

#[tokio::test]
async fn test_bad_filter_date_is_bad_request() {
    let (app, fake) = app();

    let (status, _) = send(
        app,
        request(Method::GET, "/v1/courses?start_date=yesterday", Some(ADMIN_TOKEN), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_enroll_student_returns_created() {
    let (app, _) = app();
    let body = json!({"student_id": "s-1", "course_id": "c-1"});

    let (status, body) =
        send(app, request(Method::POST, "/v1/enrollments", Some(SECRETARY_TOKEN), Some(body))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Estudiante inscrito exitosamente");
    assert_eq!(body["data"]["course_id"], "c-1");
}

#[tokio::test]
async fn test_enroll_requires_student() {
    let (app, _) = app();
    let body = json!({"student_id": "", "course_id": "c-1"});

    let (status, body) =
        send(app, request(Method::POST, "/v1/enrollments", Some(ADMIN_TOKEN), Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "El estudiante es obligatorio");
}

#[tokio::test]
async fn test_enrollments_by_course_route() {
    let (app, fake) = app();

    let (status, body) = send(
        app,
        request(Method::GET, "/v1/enrollments/course/c-3", Some(ADMIN_TOKEN), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["course_id"], "c-3");
    assert_eq!(fake.calls(), vec!["by_course c-3".to_string()]);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_without_database() {
    let (app, _) = app();

    let (status, body) = send(app, request(Method::GET, "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "not configured");
}
