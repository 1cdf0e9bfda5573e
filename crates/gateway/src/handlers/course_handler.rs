//! Course handlers.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Permission, CourseFilters};
use records_service_lib::dto::{CreateCourseDto, UpdateCourseDto, CourseResponseDto};

use crate::extractors::{FilterQuery, ValidatedJson};
use crate::middleware::{require_permission, CurrentUser};
use crate::state::AppState;
use crate::types::{ApiResponse, Created};

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/all", get(all_courses))
        .route("/:id", get(get_course).put(update_course).delete(delete_course))
}

/// Create a course; the end date must follow the start date
#[utoipa::path(
    post,
    path = "/v1/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourseDto>,
) -> AppResult<Created<CourseResponseDto>> {
    require_permission(&current_user, Permission::CreateCourses)?;
    let course = state.course_service.create_course(payload).await?;
    Ok(Created(course, "Curso creado exitosamente"))
}

/// List courses ordered by start date
#[utoipa::path(
    get,
    path = "/v1/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(
        ("title" = Option<String>, Query, description = "Substring of the title"),
        ("description" = Option<String>, Query, description = "Substring of the description"),
        ("start_date" = Option<String>, Query, description = "Starting on or after, YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "Ending on or before, YYYY-MM-DD"),
        ("date_range" = Option<String>, Query, description = "Start date between start,end")
    ),
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_courses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    FilterQuery(filters): FilterQuery<CourseFilters>,
) -> AppResult<ApiResponse<Vec<CourseResponseDto>>> {
    require_permission(&current_user, Permission::ViewCourses)?;
    let courses = state.course_service.list_courses(filters).await?;
    Ok(ApiResponse::data(courses))
}

#[utoipa::path(
    get,
    path = "/v1/courses/all",
    tag = "Courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every course", body = Vec<CourseResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn all_courses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<CourseResponseDto>>> {
    require_permission(&current_user, Permission::ViewCourses)?;
    let courses = state.course_service.all_courses().await?;
    Ok(ApiResponse::data(courses))
}

#[utoipa::path(
    get,
    path = "/v1/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course", body = CourseResponseDto),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CourseResponseDto>> {
    require_permission(&current_user, Permission::ViewCourses)?;
    let course = state.course_service.get_course(&id).await?;
    Ok(ApiResponse::data(course))
}

/// Update the fields present in the body; dates are re-checked together
#[utoipa::path(
    put,
    path = "/v1/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseResponseDto),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCourseDto>,
) -> AppResult<ApiResponse<CourseResponseDto>> {
    require_permission(&current_user, Permission::EditCourses)?;
    let course = state.course_service.update_course(&id, payload).await?;
    Ok(ApiResponse::with_message(course, "Curso actualizado exitosamente"))
}

#[utoipa::path(
    delete,
    path = "/v1/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    require_permission(&current_user, Permission::DeleteCourses)?;
    state.course_service.delete_course(&id).await?;
    Ok(ApiResponse::message("Curso eliminado exitosamente"))
}
