use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{CourseRepository, StoreError};
use crate::models::{Course, CourseDraft};

/// Volatile course store. State lives exactly as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryCourseStore {
    courses: RwLock<HashMap<String, Course>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Current time, bumped past `previous` when the clock has not moved
/// forward since then.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseStore {
    async fn create(&self, draft: CourseDraft) -> Course {
        let mut courses = self.courses.write().await;

        let mut id = Uuid::new_v4().to_string();
        while courses.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let now = Utc::now();
        let course = Course::from_draft(id.clone(), draft, now, now);
        courses.insert(id.clone(), course.clone());

        debug!(course_id = %id, total = courses.len(), "course created");
        course
    }

    async fn get(&self, id: &str) -> Result<Course, StoreError> {
        self.courses
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Vec<Course> {
        let mut snapshot: Vec<Course> = self.courses.read().await.values().cloned().collect();
        snapshot.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        snapshot
    }

    async fn update(&self, id: &str, draft: CourseDraft) -> Result<Course, StoreError> {
        let mut courses = self.courses.write().await;
        let existing = courses
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let updated_at = stamp_after(existing.updated_at);
        *existing = Course::from_draft(existing.id.clone(), draft, existing.created_at, updated_at);

        debug!(course_id = %id, "course updated");
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let removed = self.courses.write().await.remove(id);
        match removed {
            Some(_) => {
                debug!(course_id = %id, "course deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn len(&self) -> usize {
        self.courses.read().await.len()
    }
}
