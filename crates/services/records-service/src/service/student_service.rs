//! Student use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{Email, FirstName, LastName, Student, StudentFilters, StudentId};

use crate::dto::{CreateStudentDto, StudentResponseDto, UpdateStudentDto};
use crate::messages::{EMAIL_TAKEN, FAILED_TO_SAVE_STUDENT, STUDENT_NOT_FOUND};
use crate::repository::StudentRepository;

#[async_trait]
pub trait StudentService: Send + Sync {
    async fn create_student(&self, dto: CreateStudentDto) -> AppResult<StudentResponseDto>;

    /// Replace every field of an existing student.
    async fn update_student(&self, id: &str, dto: UpdateStudentDto)
        -> AppResult<StudentResponseDto>;

    async fn delete_student(&self, id: &str) -> AppResult<()>;

    async fn get_student(&self, id: &str) -> AppResult<StudentResponseDto>;

    async fn list_students(&self, filters: StudentFilters) -> AppResult<Vec<StudentResponseDto>>;

    async fn all_students(&self) -> AppResult<Vec<StudentResponseDto>>;
}

pub struct StudentManager {
    repo: Arc<dyn StudentRepository>,
}

impl StudentManager {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn create_student(&self, dto: CreateStudentDto) -> AppResult<StudentResponseDto> {
        let first_name = FirstName::new(&dto.first_name)?;
        let last_name = LastName::new(&dto.last_name)?;
        let email = Email::new(&dto.email)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AppError::validation(EMAIL_TAKEN));
        }

        self.repo
            .save(&Student::create(first_name, last_name, email.clone()))
            .await?;

        let student = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::internal(FAILED_TO_SAVE_STUDENT))?;

        info!(student_id = %student.id(), "Student created");
        Ok(StudentResponseDto::from(student))
    }

    async fn update_student(
        &self,
        id: &str,
        dto: UpdateStudentDto,
    ) -> AppResult<StudentResponseDto> {
        let mut student = self
            .repo
            .find_by_id(&StudentId::new(id))
            .await?
            .ok_or_not_found(STUDENT_NOT_FOUND)?;

        let first_name = FirstName::new(&dto.first_name)?;
        let last_name = LastName::new(&dto.last_name)?;
        let email = Email::new(&dto.email)?;

        if let Some(owner) = self.repo.find_by_email(&email).await? {
            if owner != student {
                return Err(AppError::validation(EMAIL_TAKEN));
            }
        }

        student.update_first_name(first_name);
        student.update_last_name(last_name);
        student.update_email(email);
        self.repo.save(&student).await?;

        Ok(StudentResponseDto::from(student))
    }

    async fn delete_student(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete(&StudentId::new(id)).await? {
            return Err(AppError::not_found(STUDENT_NOT_FOUND));
        }
        info!(student_id = %id, "Student deleted");
        Ok(())
    }

    async fn get_student(&self, id: &str) -> AppResult<StudentResponseDto> {
        self.repo
            .find_by_id(&StudentId::new(id))
            .await?
            .map(StudentResponseDto::from)
            .ok_or_not_found(STUDENT_NOT_FOUND)
    }

    async fn list_students(&self, filters: StudentFilters) -> AppResult<Vec<StudentResponseDto>> {
        let students = if filters.is_empty() {
            self.repo.find_all().await?
        } else {
            self.repo.find_by_filters(&filters).await?
        };
        Ok(students.into_iter().map(StudentResponseDto::from).collect())
    }

    async fn all_students(&self) -> AppResult<Vec<StudentResponseDto>> {
        let students = self.repo.find_all().await?;
        Ok(students.into_iter().map(StudentResponseDto::from).collect())
    }
}
