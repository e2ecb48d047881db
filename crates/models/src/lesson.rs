use crate::{attendance::AttendanceStatus, days::Day, time_slot::TimeSlotId};
use serde::{Deserialize, Serialize};

/// One recurring lesson in a group's weekly schedule
///
/// This is the template a dated lesson occurrence is taken from, not the
/// occurrence itself. Every field is optional because the API omits or nests
/// fields inconsistently; the grid only needs `day` and `time_slot_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot_id: Option<TimeSlotId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u32>,

    /// Outcome of the most recent occurrence for the viewing student or child
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_status: Option<AttendanceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_text: Option<String>,
}

impl LessonRecord {
    pub fn with_id(id: u32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// The grid cell this lesson occupies, if it has both coordinates
    pub fn cell(&self) -> Option<(Day, TimeSlotId)> {
        Some((self.day?, self.time_slot_id?))
    }
}
