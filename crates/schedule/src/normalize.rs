//! Coercion of loosely-shaped API responses into canonical records.
//!
//! Every function here accepts whatever the API returned and never fails:
//! anything that is not a list (bare or under `results`) yields an empty
//! list, and list elements that are not objects are dropped.

use crate::util::{first_id, first_string, get_id, get_string, list_items};
use log::debug;
use models::{
    attendance::{AttendanceMark, AttendanceStatus},
    days::Day,
    lesson::LessonRecord,
    time_slot::{TimeSlot, TimeSlotId},
};
use serde_json::Value;

type Paths = &'static [&'static [&'static str]];

// Nested objects come first; the flattened id columns are fallbacks.
const TIME_SLOT_ID: Paths = &[&["time_slot", "id"], &["time_slot_id"], &["time_slot"]];
const SUBJECT_NAME: Paths = &[
    &["subject", "name"],
    &["subject", "subject_name"],
    &["subject_name"],
];
const SUBJECT_ID: Paths = &[&["subject", "id"], &["subject_id"], &["subject"]];
const TEACHER_NAME: Paths = &[
    &["teacher", "name"],
    &["teacher_name"],
    &["subject", "teacher", "name"],
];
// A lesson without a teacher of its own is taught by the subject's teacher
const TEACHER_ID: Paths = &[
    &["teacher", "id"],
    &["teacher_id"],
    &["teacher"],
    &["subject", "teacher", "id"],
];
const GROUP_NAME: Paths = &[&["group", "name"], &["group_name"]];
const GROUP_ID: Paths = &[&["group", "id"], &["group_id"], &["group"]];

/// Converts a schedule response into lesson records
///
/// # Arguments
/// * `value` - A bare array, a `{ "results": [...] }` page, or anything else
///
/// # Returns
/// One [`LessonRecord`] per object in the list, in input order
pub fn normalize_lessons(value: &Value) -> Vec<LessonRecord> {
    let items = list_items(value);
    let lessons: Vec<LessonRecord> = items.iter().filter_map(lesson_from_value).collect();

    if lessons.len() != items.len() {
        debug!(
            "Dropped {} non-object schedule entries",
            items.len() - lessons.len()
        );
    }

    lessons
}

/// Builds a single [`LessonRecord`] from one schedule entry
///
/// # Returns
/// `None` if the entry is not a JSON object
pub fn lesson_from_value(value: &Value) -> Option<LessonRecord> {
    if !value.is_object() {
        return None;
    }

    Some(LessonRecord {
        id: get_id(value, &["id"]),
        day: parse_day(value),
        time_slot_id: first_id(value, TIME_SLOT_ID).map(TimeSlotId),
        subject_name: first_string(value, SUBJECT_NAME),
        teacher_name: first_string(value, TEACHER_NAME),
        group_name: first_string(value, GROUP_NAME),
        room: get_string(value, &["room"]),
        subject_id: first_id(value, SUBJECT_ID),
        teacher_id: first_id(value, TEACHER_ID),
        group_id: first_id(value, GROUP_ID),
        attendance_status: get_string(value, &["attendance_status"])
            .and_then(|status| status.parse::<AttendanceStatus>().ok()),
        attendance_text: get_string(value, &["attendance_text"]),
    })
}

fn parse_day(value: &Value) -> Option<Day> {
    let raw = get_string(value, &["day"])?;

    match raw.parse() {
        Ok(day) => Some(day),
        Err(e) => {
            debug!("Ignoring day of schedule entry {:?}: {e}", value.get("id"));
            None
        }
    }
}

/// Converts a time slot response into [`TimeSlot`]s
///
/// Entries without an id cannot be referenced by a lesson and are dropped.
/// Missing names and times become empty strings.
pub fn normalize_time_slots(value: &Value) -> Vec<TimeSlot> {
    list_items(value)
        .iter()
        .filter_map(|item| {
            let id = get_id(item, &["id"])?;

            Some(TimeSlot {
                id: TimeSlotId(id),
                name: get_string(item, &["name"]).unwrap_or_default(),
                start_time: get_string(item, &["start_time"]).unwrap_or_default(),
                end_time: get_string(item, &["end_time"]).unwrap_or_default(),
                order: get_id(item, &["order"]),
            })
        })
        .collect()
}

/// Converts the attendance sub-records of one lesson occurrence
///
/// The status is kept verbatim (empty when missing) so that the aggregator
/// still counts marks it cannot classify.
pub fn normalize_marks(value: &Value) -> Vec<AttendanceMark> {
    list_items(value)
        .iter()
        .filter(|item| item.is_object())
        .map(|item| AttendanceMark {
            status: get_string(item, &["status"]).unwrap_or_default(),
        })
        .collect()
}
