use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{format_timestamp, Patch};
use domain::{is_valid_role, User};

/// New staff account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUserDto {
    #[cfg_attr(feature = "openapi", schema(example = "Laura Gómez"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "laura@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "password123", min_length = 8))]
    pub password: String,
    /// `admin` or `secretary`
    #[validate(custom(function = "validate_role"))]
    #[cfg_attr(feature = "openapi", schema(example = "secretary"))]
    pub role: String,
}

/// Partial update of a staff account. Only set fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UpdateUserDto {
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub name: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub email: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub password: Patch<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub role: Patch<String>,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if is_valid_role(role) {
        Ok(())
    } else {
        Err(ValidationError::new("role").with_message(Cow::Borrowed("El rol debe ser admin o secretary")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponseDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-15 10:30:00"))]
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponseDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().value().to_string(),
            email: user.email().value().to_string(),
            created_at: format_timestamp(user.created_at()),
            updated_at: format_timestamp(user.updated_at()),
        }
    }
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_unknown_role() {
        let dto = CreateUserDto {
            name: "Laura".into(),
            email: "laura@example.com".into(),
            password: "password123".into(),
            role: "guest".into(),
        };
        let errors = dto.validate().unwrap_err();
        let message = errors.field_errors()["role"][0].message.clone().unwrap();
        assert_eq!(message, "El rol debe ser admin o secretary");
    }

    #[test]
    fn test_update_null_fields_are_kept() {
        let dto: UpdateUserDto =
            serde_json::from_str(r#"{"name": "Laura", "email": null}"#).unwrap();
        assert_eq!(dto.name, Patch::Set("Laura".to_string()));
        assert_eq!(dto.email, Patch::Keep);
        assert_eq!(dto.role, Patch::Keep);
    }
}
