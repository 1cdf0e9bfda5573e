//! Student aggregate.

mod name;

use chrono::{DateTime, Utc};

pub use name::{FirstName, LastName};

use crate::email::Email;
use crate::ids::StudentId;

/// Student record.
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    first_name: FirstName,
    last_name: LastName,
    email: Email,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Student {
    /// Rebuild a student from stored state.
    pub fn new(
        id: StudentId,
        first_name: FirstName,
        last_name: LastName,
        email: Email,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            created_at,
            updated_at,
        }
    }

    /// New, unsaved student. The store assigns the id.
    pub fn create(first_name: FirstName, last_name: LastName, email: Email) -> Self {
        let now = Utc::now();
        Self::new(StudentId::unassigned(), first_name, last_name, email, now, now)
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_first_name(&mut self, first_name: FirstName) {
        self.first_name = first_name;
        self.touch();
    }

    pub fn update_last_name(&mut self, last_name: LastName) {
        self.last_name = last_name;
        self.touch();
    }

    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Students are the same entity when their ids match.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}
