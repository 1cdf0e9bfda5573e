use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::{Permission, User, UserId, UserRole};

/// Login credentials.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginDto {
    #[validate(email(message = "El formato del email no es válido"))]
    #[cfg_attr(feature = "openapi", schema(example = "admin@example.com"))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    #[cfg_attr(feature = "openapi", schema(example = "password123"))]
    pub password: String,
}

/// Successful login: the bearer token plus a summary of the user.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponseDto {
    pub token: String,
    #[cfg_attr(feature = "openapi", schema(example = "Bearer"))]
    pub token_type: String,
    /// Seconds until the token expires
    #[cfg_attr(feature = "openapi", schema(example = 86400))]
    pub expires_in: i64,
    pub user: LoginUserDto,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for LoginUserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().value().to_string(),
            email: user.email().value().to_string(),
        }
    }
}

/// Owner of a valid bearer token, as seen by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` when no role was ever assigned
    pub role: Option<UserRole>,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User, role: Option<UserRole>) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().value().to_string(),
            email: user.email().value().to_string(),
            role,
        }
    }

    pub fn user_id(&self) -> UserId {
        UserId::new(self.id.clone())
    }

    /// A user without a role can do nothing.
    pub fn can(&self, permission: Permission) -> bool {
        self.role.is_some_and(|role| role.can(permission))
    }
}
