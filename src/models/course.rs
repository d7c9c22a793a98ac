use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lms::LmsInfo;
use super::timestamp;
use super::zoom::ZoomMeeting;

/// A stored course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_meeting: Option<ZoomMeeting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lms_info: Option<LmsInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller payload for create and update.
///
/// Carries no identity or timestamps, so whatever a client sends for
/// `id`, `createdAt` or `updatedAt` is dropped during decoding. Missing
/// fields fall back to their zero values: an update that omits a field
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseDraft {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_meeting: Option<ZoomMeeting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lms_info: Option<LmsInfo>,
}

impl Course {
    /// Build a record from a draft and the store-owned fields.
    pub fn from_draft(
        id: String,
        draft: CourseDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            zoom_meeting: draft.zoom_meeting,
            lms_info: draft.lms_info,
            created_at,
            updated_at,
        }
    }

    /// The caller-editable part of this record.
    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            zoom_meeting: self.zoom_meeting.clone(),
            lms_info: self.lms_info.clone(),
        }
    }
}
