//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with every permission
pub const ROLE_ADMIN: &str = "admin";

/// Secretary role: manages courses, students and enrollments
pub const ROLE_SECRETARY: &str = "secretary";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_SECRETARY];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation
// =============================================================================

/// Maximum email length
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Minimum user name length
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum user name length
pub const MAX_NAME_LENGTH: usize = 255;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum student first/last name length
pub const MAX_PERSON_NAME_LENGTH: usize = 255;

/// Course title bounds
pub const MIN_TITLE_LENGTH: usize = 2;
pub const MAX_TITLE_LENGTH: usize = 255;

/// Course description bounds
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

// =============================================================================
// Authentication
// =============================================================================

/// Default bearer token lifetime in hours
pub const DEFAULT_TOKEN_EXPIRATION_HOURS: i64 = 24;

/// Random bytes behind each token value (hex-encoded to 64 chars)
pub const TOKEN_BYTES: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type identifier returned on login
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Formats
// =============================================================================

/// Calendar date format used for course dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used for enrollment dates and responses
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
