//! Course use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{Course, CourseFilters, CourseId, Description, EndDate, StartDate, Title};

use crate::dto::{CourseResponseDto, CreateCourseDto, Patch, UpdateCourseDto};
use crate::messages::COURSE_NOT_FOUND;
use crate::repository::CourseRepository;

#[async_trait]
pub trait CourseService: Send + Sync {
    async fn create_course(&self, dto: CreateCourseDto) -> AppResult<CourseResponseDto>;

    /// Rebuild the course from its stored state plus the set fields.
    async fn update_course(&self, id: &str, dto: UpdateCourseDto) -> AppResult<CourseResponseDto>;

    async fn delete_course(&self, id: &str) -> AppResult<()>;

    async fn get_course(&self, id: &str) -> AppResult<CourseResponseDto>;

    async fn list_courses(&self, filters: CourseFilters) -> AppResult<Vec<CourseResponseDto>>;

    async fn all_courses(&self) -> AppResult<Vec<CourseResponseDto>>;
}

pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
}

impl CourseManager {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn create_course(&self, dto: CreateCourseDto) -> AppResult<CourseResponseDto> {
        let title = Title::new(dto.title)?;
        let description = Description::new(dto.description)?;
        let start_date = StartDate::new(dto.start_date)?;
        let end_date = EndDate::new(dto.end_date, Some(&start_date))?;

        let course = self
            .repo
            .save(&Course::create(title, description, start_date, end_date))
            .await?;

        info!(course_id = %course.id(), "Course created");
        Ok(CourseResponseDto::from(course))
    }

    async fn update_course(&self, id: &str, dto: UpdateCourseDto) -> AppResult<CourseResponseDto> {
        let existing = self
            .repo
            .find_by_id(&CourseId::new(id))
            .await?
            .ok_or_not_found(COURSE_NOT_FOUND)?;

        let title = match dto.title {
            Patch::Set(title) => Title::new(title)?,
            Patch::Keep => existing.title().clone(),
        };
        let description = match dto.description {
            Patch::Set(description) => Description::new(description)?,
            Patch::Keep => existing.description().clone(),
        };

        let start_changed = dto.start_date.is_set();
        let start_date = match dto.start_date {
            Patch::Set(start) => StartDate::new(start)?,
            Patch::Keep => existing.start_date().clone(),
        };
        let end_date = match dto.end_date {
            Patch::Set(end) => EndDate::new(end, Some(&start_date))?,
            Patch::Keep => {
                let end = existing.end_date().clone();
                if start_changed {
                    end.ensure_after(&start_date)?;
                }
                end
            }
        };

        let course = Course::new(
            existing.id().clone(),
            title,
            description,
            start_date,
            end_date,
        );

        let saved = self.repo.save(&course).await?;
        Ok(CourseResponseDto::from(saved))
    }

    async fn delete_course(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete(&CourseId::new(id)).await? {
            return Err(AppError::not_found(COURSE_NOT_FOUND));
        }
        info!(course_id = %id, "Course deleted");
        Ok(())
    }

    async fn get_course(&self, id: &str) -> AppResult<CourseResponseDto> {
        self.repo
            .find_by_id(&CourseId::new(id))
            .await?
            .map(CourseResponseDto::from)
            .ok_or_not_found(COURSE_NOT_FOUND)
    }

    async fn list_courses(&self, filters: CourseFilters) -> AppResult<Vec<CourseResponseDto>> {
        let courses = if filters.is_empty() {
            self.repo.find_all().await?
        } else {
            self.repo.find_by_filters(&filters).await?
        };
        Ok(courses.into_iter().map(CourseResponseDto::from).collect())
    }

    async fn all_courses(&self) -> AppResult<Vec<CourseResponseDto>> {
        let courses = self.repo.find_all().await?;
        Ok(courses.into_iter().map(CourseResponseDto::from).collect())
    }
}
