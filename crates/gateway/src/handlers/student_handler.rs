//! Student handlers.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Permission, StudentFilters};
use records_service_lib::dto::{CreateStudentDto, UpdateStudentDto, StudentResponseDto};

use crate::extractors::{FilterQuery, ValidatedJson};
use crate::middleware::{require_permission, CurrentUser};
use crate::state::AppState;
use crate::types::{ApiResponse, Created};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/all", get(all_students))
        .route("/:id", get(get_student).put(update_student).delete(delete_student))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/v1/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentDto>,
) -> AppResult<Created<StudentResponseDto>> {
    require_permission(&current_user, Permission::CreateStudents)?;
    let student = state.student_service.create_student(payload).await?;
    Ok(Created(student, "Estudiante creado exitosamente"))
}

/// List students matching the query filters
#[utoipa::path(
    get,
    path = "/v1/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(
        ("first_name" = Option<String>, Query, description = "Substring of the first name"),
        ("last_name" = Option<String>, Query, description = "Substring of the last name"),
        ("name" = Option<String>, Query, description = "Substring of either name"),
        ("email" = Option<String>, Query, description = "Substring of the email"),
        ("created_at" = Option<String>, Query, description = "Creation day, YYYY-MM-DD"),
        ("date_range" = Option<String>, Query, description = "start,end")
    ),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_students(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    FilterQuery(filters): FilterQuery<StudentFilters>,
) -> AppResult<ApiResponse<Vec<StudentResponseDto>>> {
    require_permission(&current_user, Permission::ViewStudents)?;
    let students = state.student_service.list_students(filters).await?;
    Ok(ApiResponse::data(students))
}

#[utoipa::path(
    get,
    path = "/v1/students/all",
    tag = "Students",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every student", body = Vec<StudentResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn all_students(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<StudentResponseDto>>> {
    require_permission(&current_user, Permission::ViewStudents)?;
    let students = state.student_service.all_students().await?;
    Ok(ApiResponse::data(students))
}

#[utoipa::path(
    get,
    path = "/v1/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student", body = StudentResponseDto),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<StudentResponseDto>> {
    require_permission(&current_user, Permission::ViewStudents)?;
    let student = state.student_service.get_student(&id).await?;
    Ok(ApiResponse::data(student))
}

#[utoipa::path(
    put,
    path = "/v1/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentResponseDto),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateStudentDto>,
) -> AppResult<ApiResponse<StudentResponseDto>> {
    require_permission(&current_user, Permission::EditStudents)?;
    let student = state.student_service.update_student(&id, payload).await?;
    Ok(ApiResponse::with_message(student, "Estudiante actualizado exitosamente"))
}

#[utoipa::path(
    delete,
    path = "/v1/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    require_permission(&current_user, Permission::DeleteStudents)?;
    state.student_service.delete_student(&id).await?;
    Ok(ApiResponse::message("Estudiante eliminado exitosamente"))
}
