use serde::{Deserialize, Serialize};

/// Learning management system cross-reference. Stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LmsInfo {
    pub lms_id: String,
    pub course_code: String,
    pub section: String,
    pub term: String,
    pub instructor_id: String,
}
