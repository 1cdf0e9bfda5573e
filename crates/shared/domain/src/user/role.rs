//! Staff roles and the permissions they grant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_SECRETARY};
use crate::error::DomainError;

/// Role assigned to a staff user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Secretary,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check whether this role grants `permission`.
    pub fn can(&self, permission: Permission) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Secretary => matches!(
                permission,
                Permission::ViewUsers
                    | Permission::ViewCourses
                    | Permission::CreateCourses
                    | Permission::EditCourses
                    | Permission::ViewStudents
                    | Permission::CreateStudents
                    | Permission::EditStudents
                    | Permission::ViewEnrollments
                    | Permission::CreateEnrollments
                    | Permission::EditEnrollments
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Secretary => ROLE_SECRETARY,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_SECRETARY => Ok(UserRole::Secretary),
            _ => Err(DomainError::validation("El rol debe ser admin o secretary")),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action a role may be allowed to perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewUsers,
    CreateUsers,
    EditUsers,
    DeleteUsers,
    ViewCourses,
    CreateCourses,
    EditCourses,
    DeleteCourses,
    ViewStudents,
    CreateStudents,
    EditStudents,
    DeleteStudents,
    ViewEnrollments,
    CreateEnrollments,
    EditEnrollments,
    DeleteEnrollments,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "view users",
            Permission::CreateUsers => "create users",
            Permission::EditUsers => "edit users",
            Permission::DeleteUsers => "delete users",
            Permission::ViewCourses => "view courses",
            Permission::CreateCourses => "create courses",
            Permission::EditCourses => "edit courses",
            Permission::DeleteCourses => "delete courses",
            Permission::ViewStudents => "view students",
            Permission::CreateStudents => "create students",
            Permission::EditStudents => "edit students",
            Permission::DeleteStudents => "delete students",
            Permission::ViewEnrollments => "view enrollments",
            Permission::CreateEnrollments => "create enrollments",
            Permission::EditEnrollments => "edit enrollments",
            Permission::DeleteEnrollments => "delete enrollments",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("secretary".parse::<UserRole>().unwrap(), UserRole::Secretary);
        assert_eq!(UserRole::Secretary.to_string(), "secretary");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = "guest".parse::<UserRole>().unwrap_err();
        assert_eq!(err.to_string(), "El rol debe ser admin o secretary");
    }

    #[test]
    fn test_admin_can_do_everything() {
        assert!(UserRole::Admin.can(Permission::DeleteUsers));
        assert!(UserRole::Admin.can(Permission::DeleteEnrollments));
    }

    #[test]
    fn test_secretary_permissions() {
        let secretary = UserRole::Secretary;
        assert!(secretary.can(Permission::ViewUsers));
        assert!(!secretary.can(Permission::CreateUsers));
        assert!(!secretary.can(Permission::EditUsers));
        assert!(!secretary.can(Permission::DeleteUsers));
        assert!(secretary.can(Permission::EditCourses));
        assert!(!secretary.can(Permission::DeleteCourses));
        assert!(secretary.can(Permission::CreateStudents));
        assert!(!secretary.can(Permission::DeleteStudents));
        assert!(secretary.can(Permission::CreateEnrollments));
        assert!(!secretary.can(Permission::DeleteEnrollments));
    }
}
