//! Authentication handlers.
//!
//! Mounted directly in the router since login is public and the rest are not.

use axum::extract::{Extension, State};

use common::AppResult;
use records_service_lib::dto::{AuthenticatedUser, LoginDto, LoginResponseDto};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::types::ApiResponse;

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "Authentication",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> AppResult<ApiResponse<LoginResponseDto>> {
    let response = state.auth_service.login(payload).await?;
    Ok(ApiResponse::with_message(response, "Login exitoso"))
}

/// Revoke every token of the caller
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn logout(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<()>> {
    state.auth_service.logout(&current_user.id()).await?;
    Ok(ApiResponse::message("Logout exitoso"))
}

#[utoipa::path(
    get,
    path = "/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = AuthenticatedUser),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<AuthenticatedUser>> {
    let user = state.auth_service.current_user(Some(&current_user.id())).await?;
    Ok(ApiResponse::data(user))
}
