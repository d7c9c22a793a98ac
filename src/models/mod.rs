pub mod course;
pub mod lms;
pub mod timestamp;
pub mod zoom;

pub use course::{Course, CourseDraft};
pub use lms::LmsInfo;
pub use zoom::{ZoomMeeting, ZoomSettings};
