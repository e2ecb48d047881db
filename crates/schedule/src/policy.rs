//! Per-role view rules for schedule screens.
//!
//! These only report eligibility; performing an edit or recording
//! attendance is up to the caller.

use crate::grid::ScheduleGrid;
use chrono::Weekday;
use models::{days::Day, lesson::LessonRecord, role::Role};
use serde::Serialize;

/// Whether lessons may be added, edited or deleted
pub fn can_edit_schedule(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

/// Whether the viewer's own (or child's) attendance outcome is shown
pub fn should_show_attendance(role: Role) -> bool {
    matches!(role, Role::Student | Role::Parent)
}

/// Teachers viewing their own schedule don't need their name repeated
pub fn should_show_teacher_name(role: Role) -> bool {
    role != Role::Teacher
}

/// A teacher's week spans several groups, so each lesson names its group
pub fn should_show_group_name(role: Role) -> bool {
    role == Role::Teacher
}

/// Whether the course and group selectors are offered
pub fn can_view_all(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager | Role::Teacher)
}

/// Whether a teacher may mark attendance for a lesson right now
///
/// Only today's lessons, and only the teacher's own. Lessons on other days
/// stay closed even retroactively, and a lesson or viewer without a known
/// teacher id never matches.
///
/// # Arguments
/// * `lesson` - The lesson being opened
/// * `role` - The viewer's role
/// * `current_teacher_id` - The viewer's teacher id, if resolved
/// * `today` - The current weekday
pub fn is_editable_lesson(
    lesson: &LessonRecord,
    role: Role,
    current_teacher_id: Option<u32>,
    today: Weekday,
) -> bool {
    let is_today = lesson
        .day
        .is_some_and(|day| Day::from_weekday(today) == Some(day));
    let is_own = matches!(
        (lesson.teacher_id, current_teacher_id),
        (Some(owner), Some(viewer)) if owner == viewer
    );

    role == Role::Teacher && is_today && is_own
}

/// Ids of the grid lessons [`is_editable_lesson`] opens for marking on `today`
pub fn markable_lessons(
    grid: &ScheduleGrid,
    role: Role,
    current_teacher_id: Option<u32>,
    today: Weekday,
) -> Vec<u32> {
    grid.iter()
        .flat_map(|(_, lessons)| lessons.values())
        .filter(|lesson| is_editable_lesson(lesson, role, current_teacher_id, today))
        .filter_map(|lesson| lesson.id)
        .collect()
}

/// The per-role rules bundled for a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleView {
    pub can_edit: bool,
    pub can_view_all: bool,
    pub show_attendance: bool,
    pub show_teacher_name: bool,
    pub show_group_name: bool,
}

impl RoleView {
    pub fn for_role(role: Role) -> Self {
        Self {
            can_edit: can_edit_schedule(role),
            can_view_all: can_view_all(role),
            show_attendance: should_show_attendance(role),
            show_teacher_name: should_show_teacher_name(role),
            show_group_name: should_show_group_name(role),
        }
    }
}
