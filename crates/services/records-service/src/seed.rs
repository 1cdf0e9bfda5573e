//! Initial data: the administrator account.

use tracing::info;

use common::{AppError, AppResult};
use domain::{Email, Name, Password, PasswordHasher, User, UserRole};

use crate::config::AdminSeedConfig;
use crate::messages::FAILED_TO_SAVE_USER;
use crate::repository::{RoleRepository, UserRepository};

/// Make sure the configured administrator exists and holds the admin role.
///
/// Returns `true` when the account was created, `false` when it was already
/// there. An existing account keeps its password.
pub async fn seed_admin(
    users: &dyn UserRepository,
    roles: &dyn RoleRepository,
    hasher: &dyn PasswordHasher,
    admin: &AdminSeedConfig,
) -> AppResult<bool> {
    let email = Email::new(&admin.email)?;

    if let Some(existing) = users.find_by_email(&email).await? {
        roles.assign_role(existing.id(), UserRole::Admin).await?;
        info!(email = %email, "Admin user already present");
        return Ok(false);
    }

    let password = Password::new(admin.password.as_str())?.hashed_with(hasher)?;
    users
        .save(&User::create(Name::new(&admin.name)?, email.clone(), password))
        .await?;

    let created = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::internal(FAILED_TO_SAVE_USER))?;
    roles.assign_role(created.id(), UserRole::Admin).await?;

    info!(email = %email, "Admin user created");
    Ok(true)
}
