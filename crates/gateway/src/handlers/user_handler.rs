//! User handlers.

use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Permission, UserFilters};
use records_service_lib::dto::{CreateUserDto, UpdateUserDto, UserResponseDto};

use crate::extractors::{FilterQuery, ValidatedJson};
use crate::middleware::{require_permission, CurrentUser};
use crate::state::AppState;
use crate::types::{ApiResponse, Created};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/all", get(all_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a staff user with a role
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> AppResult<Created<UserResponseDto>> {
    require_permission(&current_user, Permission::CreateUsers)?;
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(user, "Usuario creado exitosamente"))
}

/// List users matching the query filters
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("name" = Option<String>, Query, description = "Substring of the name"),
        ("email" = Option<String>, Query, description = "Substring of the email"),
        ("created_at" = Option<String>, Query, description = "Creation day, YYYY-MM-DD"),
        ("date_range" = Option<String>, Query, description = "start,end")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    FilterQuery(filters): FilterQuery<UserFilters>,
) -> AppResult<ApiResponse<Vec<UserResponseDto>>> {
    require_permission(&current_user, Permission::ViewUsers)?;
    let users = state.user_service.list_users(filters).await?;
    Ok(ApiResponse::data(users))
}

#[utoipa::path(
    get,
    path = "/v1/users/all",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every user", body = Vec<UserResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn all_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<UserResponseDto>>> {
    require_permission(&current_user, Permission::ViewUsers)?;
    let users = state.user_service.all_users().await?;
    Ok(ApiResponse::data(users))
}

#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserResponseDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<UserResponseDto>> {
    require_permission(&current_user, Permission::ViewUsers)?;
    let user = state.user_service.get_user(&id).await?;
    Ok(ApiResponse::data(user))
}

/// Update the fields present in the body
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponseDto),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> AppResult<ApiResponse<UserResponseDto>> {
    require_permission(&current_user, Permission::EditUsers)?;
    let user = state.user_service.update_user(&id, payload).await?;
    Ok(ApiResponse::with_message(user, "Usuario actualizado exitosamente"))
}

#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    require_permission(&current_user, Permission::DeleteUsers)?;
    state.user_service.delete_user(&id).await?;
    Ok(ApiResponse::message("Usuario eliminado exitosamente"))
}
