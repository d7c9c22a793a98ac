use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Videoconference meeting attached to a course. Stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomMeeting {
    pub meeting_id: String,
    pub join_url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_time: DateTime<Utc>,
    /// Length in minutes.
    pub duration: i32,
    pub topic: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub password: Option<String>,
    pub settings: ZoomSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub waiting_room: bool,
}

fn is_blank(password: &Option<String>) -> bool {
    password.as_deref().is_none_or(str::is_empty)
}
