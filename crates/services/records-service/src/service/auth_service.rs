//! Login, logout and bearer token resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{
    AuthenticationToken, Email, PasswordHasher, TokenValue, UserId, SECONDS_PER_HOUR,
    TOKEN_TYPE_BEARER,
};

use crate::dto::{AuthenticatedUser, LoginDto, LoginResponseDto, LoginUserDto};
use crate::messages::{TOKEN_EXPIRED, TOKEN_INVALID, TOKEN_MISSING, USER_NOT_AUTHENTICATED, USER_NOT_FOUND};
use crate::repository::{AuthenticationTokenRepository, RoleRepository, UserRepository};

/// Well-formed Argon2 hash that matches no password. Verified against when
/// the email is unknown so both paths cost the same.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$taLJYlBhI2bqJy/6xtl0Sq9LRarNlqp8/Lkx7jtVglk";

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a bearer token.
    async fn login(&self, dto: LoginDto) -> AppResult<LoginResponseDto>;

    /// Revoke every token the user holds.
    async fn logout(&self, user_id: &UserId) -> AppResult<()>;

    /// Resolve a raw bearer token to its owner.
    async fn authenticate(&self, token: Option<&str>) -> AppResult<AuthenticatedUser>;

    async fn current_user(&self, user_id: Option<&UserId>) -> AppResult<AuthenticatedUser>;
}

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    tokens: Arc<dyn AuthenticationTokenRepository>,
    hasher: Arc<dyn PasswordHasher>,
    expiration_hours: i64,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        tokens: Arc<dyn AuthenticationTokenRepository>,
        hasher: Arc<dyn PasswordHasher>,
        expiration_hours: i64,
    ) -> Self {
        Self {
            users,
            roles,
            tokens,
            hasher,
            expiration_hours,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, dto: LoginDto) -> AppResult<LoginResponseDto> {
        let Ok(email) = Email::new(&dto.email) else {
            warn!("Rejected login with malformed email");
            return Err(AppError::InvalidCredentials);
        };

        let user = self.users.find_by_email(&email).await?;

        let password_valid = match &user {
            Some(user) => user.password().verify(&dto.password, self.hasher.as_ref()),
            None => {
                self.hasher.verify(&dto.password, DUMMY_HASH);
                false
            }
        };

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                warn!(email = %email, "Rejected login");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self
            .tokens
            .save(&AuthenticationToken::create(
                user.id().clone(),
                self.expiration_hours,
            ))
            .await?;

        info!(user_id = %user.id(), "User logged in");

        Ok(LoginResponseDto {
            token: token.token().value().to_string(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expiration_hours * SECONDS_PER_HOUR,
            user: LoginUserDto::from(&user),
        })
    }

    async fn logout(&self, user_id: &UserId) -> AppResult<()> {
        let revoked = self.tokens.delete_by_user_id(user_id).await?;
        info!(user_id = %user_id, revoked, "User logged out");
        Ok(())
    }

    async fn authenticate(&self, token: Option<&str>) -> AppResult<AuthenticatedUser> {
        let raw = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized(TOKEN_MISSING))?;

        let value = TokenValue::new(raw).map_err(|_| AppError::unauthorized(TOKEN_INVALID))?;

        let stored = self
            .tokens
            .find_by_token(&value)
            .await?
            .ok_or_else(|| AppError::unauthorized(TOKEN_INVALID))?;

        if stored.is_expired() {
            return Err(AppError::unauthorized(TOKEN_EXPIRED));
        }

        let user = self
            .users
            .find_by_id(stored.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized(TOKEN_INVALID))?;

        let role = self.roles.find_role(user.id()).await?;
        Ok(AuthenticatedUser::from_user(&user, role))
    }

    async fn current_user(&self, user_id: Option<&UserId>) -> AppResult<AuthenticatedUser> {
        let user_id = user_id.ok_or_else(|| AppError::unauthorized(USER_NOT_AUTHENTICATED))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND)?;

        let role = self.roles.find_role(user.id()).await?;
        Ok(AuthenticatedUser::from_user(&user, role))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::repository::{
        MockAuthenticationTokenRepository, MockRoleRepository, MockUserRepository,
    };
    use crate::service::test_support::PrefixHasher;
    use domain::{Argon2Hasher, Name, Password, User, UserRole};

    fn admin() -> User {
        User::new(
            UserId::new("u-1"),
            Name::new("Administrador").unwrap(),
            Email::new("admin@example.com").unwrap(),
            Password::from_hash("hashed:password123").unwrap(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn stored_token(user_id: &str, expires_in_hours: i64) -> AuthenticationToken {
        let now = Utc::now();
        AuthenticationToken::new(
            Some(1),
            TokenValue::generate(),
            UserId::new(user_id),
            now - Duration::hours(1),
            now + Duration::hours(expires_in_hours),
        )
    }

    fn authenticator(
        users: MockUserRepository,
        roles: MockRoleRepository,
        tokens: MockAuthenticationTokenRepository,
    ) -> Authenticator {
        Authenticator::new(
            Arc::new(users),
            Arc::new(roles),
            Arc::new(tokens),
            Arc::new(PrefixHasher),
            24,
        )
    }

    fn login(email: &str, password: &str) -> LoginDto {
        LoginDto {
            email: email.into(),
            password: password.into(),
        }
    }

    // =========================================================================
    // login
    // =========================================================================

    #[tokio::test]
    async fn test_login_issues_day_long_bearer_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(Some(admin())));

        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens
            .expect_save()
            .withf(|t| t.user_id().value() == "u-1" && !t.is_expired())
            .times(1)
            .returning(|t| Ok(t.clone().with_id(1)));

        let response = authenticator(users, MockRoleRepository::new(), tokens)
            .login(login("admin@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86_400);
        assert_eq!(response.token.len(), 64);
        assert_eq!(response.user.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_generic() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(Some(admin())));
        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens.expect_save().never();

        let err = authenticator(users, MockRoleRepository::new(), tokens)
            .login(login("admin@example.com", "wrong-password"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_or_malformed_email_is_generic() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let auth = authenticator(
            users,
            MockRoleRepository::new(),
            MockAuthenticationTokenRepository::new(),
        );

        for email in ["ghost@example.com", "not-an-email"] {
            let err = auth.login(login(email, "password123")).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
        }
    }

    #[test]
    fn test_dummy_hash_parses_and_matches_nothing() {
        assert!(!Argon2Hasher.verify("password123", DUMMY_HASH));
        assert!(argon2::PasswordHash::new(DUMMY_HASH).is_ok());
    }

    // =========================================================================
    // authenticate
    // =========================================================================

    #[tokio::test]
    async fn test_authenticate_missing_token() {
        let auth = authenticator(
            MockUserRepository::new(),
            MockRoleRepository::new(),
            MockAuthenticationTokenRepository::new(),
        );

        for token in [None, Some(""), Some("   ")] {
            let err = auth.authenticate(token).await.unwrap_err();
            assert!(matches!(err, AppError::Unauthorized(ref m) if m == TOKEN_MISSING));
        }
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens.expect_find_by_token().returning(|_| Ok(None));

        let err = authenticator(MockUserRepository::new(), MockRoleRepository::new(), tokens)
            .authenticate(Some("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(ref m) if m == TOKEN_INVALID));
    }

    #[tokio::test]
    async fn test_authenticate_expired_token() {
        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens
            .expect_find_by_token()
            .returning(|_| Ok(Some(stored_token("u-1", -1))));

        let err = authenticator(MockUserRepository::new(), MockRoleRepository::new(), tokens)
            .authenticate(Some("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(ref m) if m == TOKEN_EXPIRED));
    }

    #[tokio::test]
    async fn test_authenticate_resolves_user_and_role() {
        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens
            .expect_find_by_token()
            .returning(|_| Ok(Some(stored_token("u-1", 5))));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(Some(admin())));
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_role()
            .returning(|_| Ok(Some(UserRole::Admin)));

        let user = authenticator(users, roles, tokens)
            .authenticate(Some("abc"))
            .await
            .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, Some(UserRole::Admin));
    }

    // =========================================================================
    // logout / current_user
    // =========================================================================

    #[tokio::test]
    async fn test_logout_revokes_every_token() {
        let mut tokens = MockAuthenticationTokenRepository::new();
        tokens
            .expect_delete_by_user_id()
            .withf(|id| id.value() == "u-1")
            .times(1)
            .returning(|_| Ok(3));

        authenticator(MockUserRepository::new(), MockRoleRepository::new(), tokens)
            .logout(&UserId::new("u-1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_current_user_requires_identity() {
        let err = authenticator(
            MockUserRepository::new(),
            MockRoleRepository::new(),
            MockAuthenticationTokenRepository::new(),
        )
        .current_user(None)
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(ref m) if m == USER_NOT_AUTHENTICATED));
    }
}
