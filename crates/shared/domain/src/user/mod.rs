//! Staff user aggregate.

mod name;
mod password;
mod role;

use chrono::{DateTime, Utc};

pub use name::Name;
pub use password::{Argon2Hasher, Password, PasswordHasher};
pub use role::{Permission, UserRole};

use crate::email::Email;
use crate::ids::UserId;

/// Staff account. Roles live outside the aggregate.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: Name,
    email: Email,
    password: Password,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Rebuild a user from stored state.
    pub fn new(
        id: UserId,
        name: Name,
        email: Email,
        password: Password,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at,
            updated_at,
        }
    }

    /// New, unsaved user. The store assigns the id.
    pub fn create(name: Name, email: Email, password: Password) -> Self {
        let now = Utc::now();
        Self::new(UserId::unassigned(), name, email, password, now, now)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_name(&mut self, name: Name) {
        self.name = name;
        self.touch();
    }

    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    pub fn update_password(&mut self, password: Password) {
        self.password = password;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Users are the same entity when their ids match.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
