//! In-memory repositories for driving the real managers end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::filters::text_filter;
use domain::{
    AuthenticationToken, Course, CourseFilters, CourseId, Email, Enrollment, EnrollmentId,
    PasswordHasher, Student, StudentFilters, StudentId, TokenValue, User, UserFilters, UserId,
    UserRole,
};
use records_service_lib::messages::{ALREADY_ENROLLED, EMAIL_TAKEN};
use records_service_lib::repository::{
    AuthenticationTokenRepository, CourseRepository, EnrollmentRepository, RoleRepository,
    StudentRepository, UserRepository,
};
use records_service_lib::service::{
    Authenticator, CourseManager, EnrollmentManager, StudentManager, UserManager,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

// =============================================================================
// Users and roles
// =============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn save(&self, user: &User) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|u| u.email() == user.email() && u.id() != user.id())
        {
            return Err(AppError::validation(EMAIL_TAKEN));
        }

        if user.id().is_assigned() {
            rows.retain(|u| u.id() != user.id());
            rows.push(user.clone());
        } else {
            rows.push(User::new(
                UserId::new(next_id("u")),
                user.name().clone(),
                user.email().clone(),
                user.password().clone(),
                user.created_at(),
                user.updated_at(),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_filters(&self, filters: &UserFilters) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| contains(u.name().value(), text_filter(&filters.name)))
            .filter(|u| contains(u.email().value(), text_filter(&filters.email)))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id() != id);
        Ok(rows.len() < before)
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|u| u.email() == email))
    }
}

#[derive(Default)]
pub struct InMemoryRoles {
    roles: Mutex<HashMap<UserId, UserRole>>,
}

#[async_trait]
impl RoleRepository for InMemoryRoles {
    async fn assign_role(&self, user_id: &UserId, role: UserRole) -> AppResult<()> {
        self.roles.lock().unwrap().insert(user_id.clone(), role);
        Ok(())
    }

    async fn find_role(&self, user_id: &UserId) -> AppResult<Option<UserRole>> {
        Ok(self.roles.lock().unwrap().get(user_id).copied())
    }
}

// =============================================================================
// Students
// =============================================================================

#[derive(Default)]
pub struct InMemoryStudents {
    rows: Mutex<Vec<Student>>,
}

#[async_trait]
impl StudentRepository for InMemoryStudents {
    async fn save(&self, student: &Student) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|s| s.email() == student.email() && s.id() != student.id())
        {
            return Err(AppError::validation(EMAIL_TAKEN));
        }

        if student.id().is_assigned() {
            rows.retain(|s| s.id() != student.id());
            rows.push(student.clone());
        } else {
            rows.push(Student::new(
                StudentId::new(next_id("s")),
                student.first_name().clone(),
                student.last_name().clone(),
                student.email().clone(),
                student.created_at(),
                student.updated_at(),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &StudentId) -> AppResult<Option<Student>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<Student>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email() == email)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_filters(&self, filters: &StudentFilters) -> AppResult<Vec<Student>> {
        let name = text_filter(&filters.name);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| contains(s.first_name().value(), text_filter(&filters.first_name)))
            .filter(|s| contains(s.last_name().value(), text_filter(&filters.last_name)))
            .filter(|s| contains(s.email().value(), text_filter(&filters.email)))
            .filter(|s| {
                name.is_none()
                    || contains(s.first_name().value(), name)
                    || contains(s.last_name().value(), name)
            })
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &StudentId) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id() != id);
        Ok(rows.len() < before)
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|s| s.email() == email))
    }
}

// =============================================================================
// Courses and enrollments
// =============================================================================

#[derive(Default)]
pub struct InMemoryCourses {
    rows: Mutex<Vec<Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourses {
    async fn save(&self, course: &Course) -> AppResult<Course> {
        let id = if course.id().is_assigned() {
            course.id().clone()
        } else {
            CourseId::new(next_id("c"))
        };
        let stored = Course::new(
            id,
            course.title().clone(),
            course.description().clone(),
            course.start_date().clone(),
            course.end_date().clone(),
        );

        let mut rows = self.rows.lock().unwrap();
        rows.retain(|c| c.id() != stored.id());
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &CourseId) -> AppResult<Option<Course>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id() == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_filters(&self, filters: &CourseFilters) -> AppResult<Vec<Course>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| contains(c.title().value(), text_filter(&filters.title)))
            .filter(|c| contains(c.description().value(), text_filter(&filters.description)))
            .filter(|c| filters.start_date.map_or(true, |d| c.start_date().date() >= d))
            .filter(|c| filters.end_date.map_or(true, |d| c.end_date().date() <= d))
            .filter(|c| {
                filters.date_range.map_or(true, |r| {
                    c.start_date().date() >= r.start && c.start_date().date() <= r.end
                })
            })
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CourseId) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id() != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryEnrollments {
    rows: Mutex<Vec<Enrollment>>,
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollments {
    async fn save(&self, enrollment: &Enrollment) -> AppResult<Enrollment> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| {
            e.course_id() == enrollment.course_id()
                && e.student_id() == enrollment.student_id()
                && e.id() != enrollment.id()
        }) {
            return Err(AppError::validation(ALREADY_ENROLLED));
        }

        let id = if enrollment.id().is_assigned() {
            enrollment.id().clone()
        } else {
            EnrollmentId::new(next_id("e"))
        };
        let stored = Enrollment::new(
            id,
            enrollment.course_id().clone(),
            enrollment.student_id().clone(),
            enrollment.enrolled_at(),
        );
        rows.retain(|e| e.id() != stored.id());
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> AppResult<Option<Enrollment>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Enrollment>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_course_and_student(
        &self,
        course_id: &CourseId,
        student_id: &StudentId,
    ) -> AppResult<Option<Enrollment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.course_id() == course_id && e.student_id() == student_id)
            .cloned())
    }

    async fn find_by_course(&self, course_id: &CourseId) -> AppResult<Vec<Enrollment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.course_id() == course_id)
            .cloned()
            .collect())
    }

    async fn find_by_student(&self, student_id: &StudentId) -> AppResult<Vec<Enrollment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.student_id() == student_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &EnrollmentId) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id() != id);
        Ok(rows.len() < before)
    }
}

// =============================================================================
// Tokens
// =============================================================================

#[derive(Default)]
pub struct InMemoryTokens {
    rows: Mutex<Vec<AuthenticationToken>>,
    next: AtomicU64,
}

impl InMemoryTokens {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthenticationTokenRepository for InMemoryTokens {
    async fn save(&self, token: &AuthenticationToken) -> AppResult<AuthenticationToken> {
        let id = self.next.fetch_add(1, Ordering::Relaxed) as i64 + 1;
        let stored = token.clone().with_id(id);
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_token(&self, token: &TokenValue) -> AppResult<Option<AuthenticationToken>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token() == token)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<AuthenticationToken>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.user_id() != user_id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_by_token(&self, token: &TokenValue) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.token() != token);
        Ok(rows.len() < before)
    }
}

// =============================================================================
// Wiring
// =============================================================================

/// Every manager over one shared set of in-memory stores.
pub struct Harness {
    pub users: Arc<InMemoryUsers>,
    pub roles: Arc<InMemoryRoles>,
    pub students: Arc<InMemoryStudents>,
    pub courses: Arc<InMemoryCourses>,
    pub enrollments: Arc<InMemoryEnrollments>,
    pub tokens: Arc<InMemoryTokens>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl Harness {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users: Arc::default(),
            roles: Arc::default(),
            students: Arc::default(),
            courses: Arc::default(),
            enrollments: Arc::default(),
            tokens: Arc::default(),
            hasher,
        }
    }

    pub fn user_manager(&self) -> UserManager {
        UserManager::new(self.users.clone(), self.roles.clone(), self.hasher.clone())
    }

    pub fn student_manager(&self) -> StudentManager {
        StudentManager::new(self.students.clone())
    }

    pub fn course_manager(&self) -> CourseManager {
        CourseManager::new(self.courses.clone())
    }

    pub fn enrollment_manager(&self) -> EnrollmentManager {
        EnrollmentManager::new(
            self.enrollments.clone(),
            self.students.clone(),
            self.courses.clone(),
        )
    }

    pub fn authenticator(&self, hours: i64) -> Authenticator {
        Authenticator::new(
            self.users.clone(),
            self.roles.clone(),
            self.tokens.clone(),
            self.hasher.clone(),
            hours,
        )
    }
}
