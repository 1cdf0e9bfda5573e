//! Staff account use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{Email, Name, Password, PasswordHasher, User, UserFilters, UserId, UserRole};

use crate::dto::{CreateUserDto, Patch, UpdateUserDto, UserResponseDto};
use crate::messages::{EMAIL_TAKEN, FAILED_TO_SAVE_USER, USER_NOT_FOUND};
use crate::repository::{RoleRepository, UserRepository};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a staff user and assign its role.
    async fn create_user(&self, dto: CreateUserDto) -> AppResult<UserResponseDto>;

    /// Apply the set fields of `dto` to an existing user.
    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> AppResult<UserResponseDto>;

    async fn delete_user(&self, id: &str) -> AppResult<()>;

    async fn get_user(&self, id: &str) -> AppResult<UserResponseDto>;

    /// Users matching every set filter; all users when none is set.
    async fn list_users(&self, filters: UserFilters) -> AppResult<Vec<UserResponseDto>>;

    async fn all_users(&self) -> AppResult<Vec<UserResponseDto>>;
}

pub struct UserManager {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    async fn load(&self, id: &UserId) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, dto: CreateUserDto) -> AppResult<UserResponseDto> {
        let name = Name::new(&dto.name)?;
        let email = Email::new(&dto.email)?;
        let password = Password::new(dto.password)?;
        let role: UserRole = dto.role.parse()?;

        if self.users.exists_by_email(&email).await? {
            return Err(AppError::validation(EMAIL_TAKEN));
        }

        let password = password.hashed_with(self.hasher.as_ref())?;
        self.users
            .save(&User::create(name, email.clone(), password))
            .await?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::internal(FAILED_TO_SAVE_USER))?;

        // Undo the insert so a failed role assignment leaves nothing behind
        if let Err(err) = self.roles.assign_role(user.id(), role).await {
            warn!(user_id = %user.id(), "Role assignment failed, removing new user");
            if let Err(cleanup) = self.users.delete(user.id()).await {
                error!(user_id = %user.id(), error = %cleanup, "Could not remove user without role");
            }
            return Err(err);
        }
        info!(user_id = %user.id(), %role, "User created");

        Ok(UserResponseDto::from(user))
    }

    async fn update_user(&self, id: &str, dto: UpdateUserDto) -> AppResult<UserResponseDto> {
        let mut user = self.load(&UserId::new(id)).await?;

        let name = dto.name.try_map(Name::new)?;
        let email = dto.email.try_map(Email::new)?;
        let password = dto.password.try_map(Password::new)?;
        let role = dto.role.try_map(|r| r.parse::<UserRole>())?;

        if let Patch::Set(name) = name {
            user.update_name(name);
        }

        if let Patch::Set(email) = email {
            // Keeping one's own address is not a conflict
            if let Some(owner) = self.users.find_by_email(&email).await? {
                if owner != user {
                    return Err(AppError::validation(EMAIL_TAKEN));
                }
            }
            user.update_email(email);
        }

        if let Patch::Set(password) = password {
            user.update_password(password.hashed_with(self.hasher.as_ref())?);
        }

        self.users.save(&user).await?;

        if let Patch::Set(role) = role {
            self.roles.assign_role(user.id(), role).await?;
        }

        Ok(UserResponseDto::from(user))
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.users.delete(&UserId::new(id)).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn get_user(&self, id: &str) -> AppResult<UserResponseDto> {
        self.load(&UserId::new(id)).await.map(UserResponseDto::from)
    }

    async fn list_users(&self, filters: UserFilters) -> AppResult<Vec<UserResponseDto>> {
        let users = if filters.is_empty() {
            self.users.find_all().await?
        } else {
            self.users.find_by_filters(&filters).await?
        };
        Ok(users.into_iter().map(UserResponseDto::from).collect())
    }

    async fn all_users(&self) -> AppResult<Vec<UserResponseDto>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponseDto::from).collect())
    }
}
