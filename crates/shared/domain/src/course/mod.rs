//! Course aggregate.
//!
//! Courses have no mutators: an update builds a fresh `Course` from the old
//! one plus the changed fields, carrying the original id through.

mod dates;
mod text;

pub use dates::{EndDate, StartDate};
pub use text::{Description, Title};

use crate::ids::CourseId;

/// Course offered to students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: Title,
    description: Description,
    start_date: StartDate,
    end_date: EndDate,
}

impl Course {
    pub fn new(
        id: CourseId,
        title: Title,
        description: Description,
        start_date: StartDate,
        end_date: EndDate,
    ) -> Self {
        Self {
            id,
            title,
            description,
            start_date,
            end_date,
        }
    }

    /// New, unsaved course. The store assigns the id.
    pub fn create(
        title: Title,
        description: Description,
        start_date: StartDate,
        end_date: EndDate,
    ) -> Self {
        Self::new(CourseId::unassigned(), title, description, start_date, end_date)
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn start_date(&self) -> &StartDate {
        &self.start_date
    }

    pub fn end_date(&self) -> &EndDate {
        &self.end_date
    }
}
