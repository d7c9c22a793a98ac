use std::sync::Arc;

use crate::store::{CourseRepository, InMemoryCourseStore};

#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseRepository>,
}

impl AppState {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCourseStore::new()))
    }
}
