use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};
use crate::student::domain::{Student, StudentInput};
use crate::student::repository::StudentRepository;

/// Application service for student records.
///
/// Holds no mutable state of its own; every operation is one request against
/// the repository it was built with. Inputs are normalized and validated here
/// so that every repository sees the same rules.
#[derive(Clone)]
pub struct StudentDirectory {
    repo: Arc<dyn StudentRepository>,
}

impl StudentDirectory {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self { Self { repo } }

    /// Persist a new student; the store assigns the id.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: StudentInput) -> Result<Student, ServiceError> {
        let input = input.normalized();
        input.validate()?;
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "student_created");
        Ok(created.into())
    }

    /// All students in ascending id order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = self.repo.find_all().await?;
        debug!(count = rows.len(), "students_listed");
        Ok(rows.into_iter().map(Student::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_page(&self, req: PageRequest) -> Result<Page<Student>, ServiceError> {
        let (index, size) = req.validate()?;
        let (rows, total) = self.repo.find_page(index, size).await?;
        Ok(Page::new(rows, index, size, total).map(Student::from))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Student, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Student::from)
            .ok_or_else(|| ServiceError::not_found("student", id))
    }

    /// Replace name, email and course of an existing student.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: StudentInput) -> Result<Student, ServiceError> {
        let input = input.normalized();
        input.validate()?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", id))?;
        info!(id, "student_updated");
        Ok(updated.into())
    }

    /// Remove a student and hand back what was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Student, ServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", id))?;
        info!(id, "student_deleted");
        Ok(deleted.into())
    }

    /// Case-insensitive substring search on the name. The pattern is trimmed
    /// and matched literally; an empty pattern returns every student.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, pattern: &str) -> Result<Vec<Student>, ServiceError> {
        let rows = self.repo.search_by_name(pattern.trim()).await?;
        debug!(count = rows.len(), "students_searched");
        Ok(rows.into_iter().map(Student::from).collect())
    }
}
