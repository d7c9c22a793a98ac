pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Course, CourseDraft};

pub use memory::InMemoryCourseStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("course not found: {0}")]
    NotFound(String),
}

/// Owner of the course id to record mapping.
///
/// Every method is a single atomic step with respect to every other call
/// on the same store.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new record with a fresh id and `created_at == updated_at`.
    async fn create(&self, draft: CourseDraft) -> Course;

    async fn get(&self, id: &str) -> Result<Course, StoreError>;

    /// Snapshot of every live record, oldest first.
    async fn list(&self) -> Vec<Course>;

    /// Replace every field of an existing record except `id` and
    /// `created_at`. Fields the draft leaves at their defaults are not
    /// merged from the old record; they are overwritten. Never creates.
    async fn update(&self, id: &str, draft: CourseDraft) -> Result<Course, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
