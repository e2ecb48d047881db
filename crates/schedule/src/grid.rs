//! Projection of lesson records onto the day × time-slot grid.

use log::{debug, warn};
use models::{
    days::Day,
    lesson::LessonRecord,
    time_slot::{TimeSlot, TimeSlotId},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;

/// The lessons of one day, keyed by time slot. A missing key is an empty cell.
pub type DaySchedule = BTreeMap<TimeSlotId, LessonRecord>;

/// A group's (or teacher's) weekly schedule as a day × time-slot grid
///
/// Every teaching day is always present, even when it has no lessons, so
/// renderers can draw all day columns unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleGrid {
    days: [DaySchedule; 6],
}

impl ScheduleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn lesson(&self, day: Day, slot: TimeSlotId) -> Option<&LessonRecord> {
        self.day(day).get(&slot)
    }

    /// Iterates over all six days in week order
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySchedule)> {
        Day::ALL.into_iter().zip(self.days.iter())
    }

    /// Finds a lesson by id anywhere in the grid
    pub fn find_lesson(&self, id: u32) -> Option<(Day, &LessonRecord)> {
        self.iter().find_map(|(day, lessons)| {
            lessons
                .values()
                .find(|lesson| lesson.id == Some(id))
                .map(|lesson| (day, lesson))
        })
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.days.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lays the grid out as table rows, one per time slot
    ///
    /// # Arguments
    /// * `slots` - The periods to show, already in display order
    ///
    /// # Returns
    /// A row per slot, with one cell per day in week order
    pub fn rows<'a>(&'a self, slots: &'a [TimeSlot]) -> Vec<GridRow<'a>> {
        slots
            .iter()
            .map(|slot| GridRow {
                slot,
                cells: Day::ALL.map(|day| self.lesson(day, slot.id)),
            })
            .collect()
    }

    /// Places a lesson, returning the lesson it displaced
    fn insert(&mut self, day: Day, slot: TimeSlotId, lesson: LessonRecord) -> Option<LessonRecord> {
        self.days[day.index()].insert(slot, lesson)
    }
}

impl Serialize for ScheduleGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Day::ALL.len()))?;
        for (day, lessons) in self.iter() {
            map.serialize_entry(day.as_str(), lessons)?;
        }
        map.end()
    }
}

/// One time slot's lessons across the week
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub slot: &'a TimeSlot,
    pub cells: [Option<&'a LessonRecord>; 6],
}

/// Diagnostics collected while building a grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Records written into a cell, including ones later overwritten
    pub placed: usize,
    /// Records without a day or time slot
    pub skipped: usize,
    /// Cells claimed more than once, one entry per overwritten claim
    pub duplicates: Vec<(Day, TimeSlotId)>,
}

/// Builds a grid from lesson records
///
/// Records missing a day or time slot are skipped. When two records claim
/// the same cell, the later one in input order wins.
pub fn build_grid(records: &[LessonRecord]) -> ScheduleGrid {
    build_grid_with_report(records).0
}

/// Builds a grid and reports what was skipped or overwritten
pub fn build_grid_with_report(records: &[LessonRecord]) -> (ScheduleGrid, BuildReport) {
    let mut grid = ScheduleGrid::new();
    let mut report = BuildReport::default();

    for record in records {
        let Some((day, slot)) = record.cell() else {
            report.skipped += 1;
            continue;
        };

        report.placed += 1;
        if let Some(previous) = grid.insert(day, slot, record.clone()) {
            // Two lessons for one cell is a data-entry error upstream
            warn!(
                "Lesson {:?} replaces lesson {:?} at {day} slot {slot}",
                record.id, previous.id
            );
            report.duplicates.push((day, slot));
        }
    }

    debug!(
        "Built schedule grid: {} lessons placed, {} skipped, {} duplicate cells",
        report.placed,
        report.skipped,
        report.duplicates.len()
    );

    (grid, report)
}

/// Builds one independent grid per child for the parent view
///
/// # Arguments
/// * `children` - Each child's id with that child's lesson records; a child
///   not yet assigned to a group simply has no records
///
/// # Returns
/// A grid per child id, each with all six days
pub fn build_child_grids<I>(children: I) -> BTreeMap<u32, ScheduleGrid>
where
    I: IntoIterator<Item = (u32, Vec<LessonRecord>)>,
{
    children
        .into_iter()
        .map(|(child_id, records)| (child_id, build_grid(&records)))
        .collect()
}
