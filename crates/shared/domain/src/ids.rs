//! Entity identifiers.
//!
//! Ids are opaque strings assigned by the store. An empty id marks an
//! entity that has not been saved yet.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Placeholder id for an entity the store has not seen yet.
            pub fn unassigned() -> Self {
                Self(String::new())
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn is_assigned(&self) -> bool {
                !self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

identifier!(
    /// Identifier of a staff user.
    UserId
);
identifier!(
    /// Identifier of a student.
    StudentId
);
identifier!(
    /// Identifier of a course.
    CourseId
);
identifier!(
    /// Identifier of an enrollment.
    EnrollmentId
);
