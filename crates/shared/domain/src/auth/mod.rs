//! Bearer tokens issued at login.

mod token_value;

use chrono::{DateTime, Duration, Utc};

pub use token_value::TokenValue;

use crate::ids::UserId;

/// Stored credential scoped to one user. Expired tokens stay stored until
/// they are deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationToken {
    id: Option<i64>,
    token: TokenValue,
    user_id: UserId,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AuthenticationToken {
    pub fn new(
        id: Option<i64>,
        token: TokenValue,
        user_id: UserId,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            token,
            user_id,
            created_at,
            expires_at,
        }
    }

    /// Issue a fresh token for `user_id`, valid for `hours`.
    pub fn create(user_id: UserId, hours: i64) -> Self {
        let now = Utc::now();
        Self::new(
            None,
            TokenValue::generate(),
            user_id,
            now,
            now + Duration::hours(hours),
        )
    }

    /// Same token with the id the store assigned.
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn token(&self) -> &TokenValue {
        &self.token
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
