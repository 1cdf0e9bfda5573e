//! Bearer token authentication and permission checks.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::{Permission, UserId, BEARER_TOKEN_PREFIX};
use records_service_lib::dto::AuthenticatedUser;

use crate::state::AppState;

/// Owner of the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl CurrentUser {
    pub fn id(&self) -> UserId {
        self.0.user_id()
    }
}

/// Fail with 403 unless the caller's role grants `permission`.
pub fn require_permission(user: &CurrentUser, permission: Permission) -> AppResult<()> {
    if user.0.can(permission) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Resolve the bearer token and attach the [`CurrentUser`] to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request);
    let user = state.auth_service.authenticate(token).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Token part of an `Authorization: Bearer ...` header, if any.
fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserRole;

    fn request_with(header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/v1/users");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&request_with(Some("Bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&request_with(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&request_with(None)), None);
    }

    #[test]
    fn test_require_permission() {
        let secretary = CurrentUser(AuthenticatedUser {
            id: "u-2".into(),
            name: "Laura".into(),
            email: "laura@example.com".into(),
            role: Some(UserRole::Secretary),
        });

        assert!(require_permission(&secretary, Permission::EditCourses).is_ok());
        assert!(matches!(
            require_permission(&secretary, Permission::DeleteCourses),
            Err(AppError::Forbidden)
        ));
    }
}
