//! Enrollment handlers.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};

use common::AppResult;
use domain::Permission;
use records_service_lib::dto::{CreateEnrollmentDto, EnrollmentResponseDto};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_permission, CurrentUser};
use crate::state::AppState;
use crate::types::{ApiResponse, Created};

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/course/:course_id", get(enrollments_by_course))
        .route("/student/:student_id", get(enrollments_by_student))
        .route("/:id", get(get_enrollment).delete(delete_enrollment))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/v1/enrollments",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentResponseDto),
        (status = 400, description = "Already enrolled, unknown student or course"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_enrollment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEnrollmentDto>,
) -> AppResult<Created<EnrollmentResponseDto>> {
    require_permission(&current_user, Permission::CreateEnrollments)?;
    let enrollment = state.enrollment_service.create_enrollment(payload).await?;
    Ok(Created(enrollment, "Estudiante inscrito exitosamente"))
}

#[utoipa::path(
    get,
    path = "/v1/enrollments",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every enrollment", body = Vec<EnrollmentResponseDto>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_enrollments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<EnrollmentResponseDto>>> {
    require_permission(&current_user, Permission::ViewEnrollments)?;
    let enrollments = state.enrollment_service.list_enrollments().await?;
    Ok(ApiResponse::data(enrollments))
}

#[utoipa::path(
    get,
    path = "/v1/enrollments/{id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment", body = EnrollmentResponseDto),
        (status = 404, description = "Enrollment not found")
    )
)]
pub async fn get_enrollment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<EnrollmentResponseDto>> {
    require_permission(&current_user, Permission::ViewEnrollments)?;
    let enrollment = state.enrollment_service.get_enrollment(&id).await?;
    Ok(ApiResponse::data(enrollment))
}

/// Enrollments of one course
#[utoipa::path(
    get,
    path = "/v1/enrollments/course/{course_id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("course_id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Enrollments of the course", body = Vec<EnrollmentResponseDto>)
    )
)]
pub async fn enrollments_by_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<ApiResponse<Vec<EnrollmentResponseDto>>> {
    require_permission(&current_user, Permission::ViewEnrollments)?;
    let enrollments = state.enrollment_service.enrollments_by_course(&course_id).await?;
    Ok(ApiResponse::data(enrollments))
}

/// Enrollments of one student
#[utoipa::path(
    get,
    path = "/v1/enrollments/student/{student_id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("student_id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Enrollments of the student", body = Vec<EnrollmentResponseDto>)
    )
)]
pub async fn enrollments_by_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<ApiResponse<Vec<EnrollmentResponseDto>>> {
    require_permission(&current_user, Permission::ViewEnrollments)?;
    let enrollments = state.enrollment_service.enrollments_by_student(&student_id).await?;
    Ok(ApiResponse::data(enrollments))
}

#[utoipa::path(
    delete,
    path = "/v1/enrollments/{id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Enrollment not found")
    )
)]
pub async fn delete_enrollment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    require_permission(&current_user, Permission::DeleteEnrollments)?;
    state.enrollment_service.delete_enrollment(&id).await?;
    Ok(ApiResponse::message("Inscripción eliminada exitosamente"))
}
